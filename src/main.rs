use std::io;

use anyhow::{Context, Result};
use blackjack_table::{console::Console, deck::Deck, session::Session};
use rand::{rngs::SmallRng, SeedableRng};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut rng = SmallRng::from_entropy();
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, || Deck::shuffled(&mut rng));
    session.run().context("blackjack session aborted")?;
    Ok(())
}
