use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    console::Console,
    deck::Deck,
    error::GameError,
    game::{BlackjackGame, RoundReport},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    PlayerLeft,
    DeckExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub ended: SessionEnd,
}

impl SessionSummary {
    fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        if report.outcome.player_won() {
            self.wins += 1;
        } else if report.outcome.player_lost() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }
}

/// Replay loop. Every round gets a fresh deck from `deck_source`.
pub struct Session<R, W, F> {
    console: Console<R, W>,
    deck_source: F,
}

impl<R, W, F> Session<R, W, F>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> Deck,
{
    pub fn new(console: Console<R, W>, deck_source: F) -> Self {
        Session { console, deck_source }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub fn run(&mut self) -> Result<SessionSummary, GameError> {
        let mut summary = SessionSummary {
            rounds: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
            ended: SessionEnd::PlayerLeft,
        };

        loop {
            self.console.banner()?;
            let mut game = BlackjackGame::new((self.deck_source)());

            let report = match game.play(&mut self.console) {
                Ok(report) => report,
                Err(GameError::DeckExhausted) => {
                    warn!(rounds = summary.rounds, "deck exhausted, ending session");
                    self.console.report_error(&GameError::DeckExhausted)?;
                    summary.ended = SessionEnd::DeckExhausted;
                    break;
                }
                Err(err) => return Err(err),
            };

            match serde_json::to_string(&report) {
                Ok(json) => debug!(report = %json, "round report"),
                Err(err) => warn!(%err, "could not encode round report"),
            }
            summary.record(&report);

            if !self.console.ask_replay()? {
                self.console.farewell()?;
                break;
            }
        }

        info!(
            rounds = summary.rounds,
            wins = summary.wins,
            losses = summary.losses,
            pushes = summary.pushes,
            ended = ?summary.ended,
            "session finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::console::FAREWELL;

    type TestSession<F> = Session<Cursor<Vec<u8>>, Vec<u8>, F>;

    fn session<F: FnMut() -> Deck>(input: &str, deck_source: F) -> TestSession<F> {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Session::new(console, deck_source)
    }

    fn output<F: FnMut() -> Deck>(session: TestSession<F>) -> String {
        String::from_utf8(session.into_console().into_output()).unwrap()
    }

    #[test]
    fn declining_replay_ends_without_new_deck() {
        let mut decks = 0;
        let mut s = session("n\nno\n", || {
            decks += 1;
            Deck::stacked([7, 9, 10, 6, 5])
        });
        let summary = s.run().unwrap();
        drop(s);

        assert_eq!(decks, 1);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.ended, SessionEnd::PlayerLeft);
    }

    #[test]
    fn accepting_replay_builds_fresh_deck() {
        let mut decks = 0;
        let mut s = session("n\nyes\nn\nn\n", || {
            decks += 1;
            Deck::stacked([10, 9, 10, 7])
        });
        let summary = s.run().unwrap();
        let out = output(s);

        assert_eq!(decks, 2);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.wins, 2);
        assert_eq!(out.matches("Welcome to Blackjack!").count(), 2);
        assert!(out.ends_with(&format!("{FAREWELL}\n")));
    }

    #[test]
    fn exhausted_deck_ends_session_without_replay_prompt() {
        let mut s = session("y\n", || Deck::stacked([10, 2, 10, 3]));
        let summary = s.run().unwrap();
        let out = output(s);

        assert_eq!(summary.ended, SessionEnd::DeckExhausted);
        assert_eq!(summary.rounds, 0);
        assert!(out.contains("Error: the deck is empty!"));
        assert!(!out.contains("Play again?"));
        assert!(!out.contains(FAREWELL));
    }

    #[test]
    fn closed_input_propagates() {
        let mut s = session("", || Deck::with_seed(5));
        assert!(matches!(s.run(), Err(GameError::InputClosed)));
    }

    #[test]
    fn pushes_are_tallied() {
        let mut s = session("n\nn\n", || Deck::stacked([10, 8, 10, 8]));
        let summary = s.run().unwrap();
        assert_eq!(summary.pushes, 1);
        assert_eq!(summary.wins + summary.losses, 0);
    }
}
