use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    error::GameError,
    game::Outcome,
    hand::Hand,
    input::{parse_answer, Answer},
    table::{Action, RoundEvent, Table},
};

const RULE: &str = "==============================";

pub const HIT_PROMPT: &str = "Take another card? (yes/no): ";
pub const REPLAY_PROMPT: &str = "Play again? (yes/no): ";
pub const INVALID_ANSWER: &str = "Invalid input. Please answer 'yes' or 'no'.";
pub const FAREWELL: &str = "Thanks for playing! See you next time!";

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "You lose. You went over 21.",
        Outcome::DealerBust => "The dealer went over 21. You win!",
        Outcome::PlayerWins => "Congratulations, you win!",
        Outcome::DealerWins => "You lose. The dealer has the stronger hand.",
        Outcome::Push => "Push. It's a tie!",
    }
}

/// Line-oriented terminal. Generic over its streams so tests can script it.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn line(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompts once. `Ok(None)` means the line was not a recognized answer.
    fn ask(&mut self, prompt: &str) -> Result<Option<Answer>, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        let answer = parse_answer(&buf);
        debug!(raw = buf.trim(), ?answer, "read answer");
        Ok(answer)
    }

    pub fn banner(&mut self) -> Result<(), GameError> {
        self.line("")?;
        self.line("Welcome to Blackjack!")?;
        self.line("* Get to 21, or closer to it than the dealer, without going over.")?;
        self.line("* An Ace counts as 1 or 11.")?;
        self.line(RULE)
    }

    pub fn ask_replay(&mut self) -> Result<bool, GameError> {
        self.line("")?;
        Ok(self.ask(REPLAY_PROMPT)? == Some(Answer::Yes))
    }

    pub fn farewell(&mut self) -> Result<(), GameError> {
        self.line(FAREWELL)
    }

    pub fn report_error(&mut self, err: &GameError) -> Result<(), GameError> {
        self.line(&format!("Error: {err}!"))
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn show_hands(
        &mut self,
        player: &Hand,
        dealer: &Hand,
        reveal_dealer: bool,
    ) -> Result<(), GameError> {
        self.line("")?;
        self.line(RULE)?;
        let soft = if player.is_soft() { ", soft" } else { "" };
        self.line(&format!("Your cards: {player} (score: {}{soft})", player.score()))?;
        if reveal_dealer {
            self.line(&format!("Dealer's cards: {dealer} (score: {})", dealer.score()))?;
        } else {
            self.line(&format!("Dealer's cards: {}", dealer.masked()))?;
        }
        self.line(RULE)
    }

    fn choose_action(
        &mut self,
        _player: &Hand,
        _dealer: &Hand,
    ) -> Result<Option<Action>, GameError> {
        match self.ask(HIT_PROMPT)? {
            Some(Answer::Yes) => Ok(Some(Action::Hit)),
            Some(Answer::No) => Ok(Some(Action::Stand)),
            None => {
                self.line(INVALID_ANSWER)?;
                Ok(None)
            }
        }
    }

    fn announce(&mut self, event: RoundEvent) -> Result<(), GameError> {
        match event {
            RoundEvent::PlayerStands => self.line("You stand."),
            RoundEvent::PlayerBust => self.line("Bust! You went over 21."),
            RoundEvent::DealerTurn => {
                self.line("")?;
                self.line("Dealer's turn...")
            }
            RoundEvent::DealerBust => self.line("The dealer busts!"),
            RoundEvent::Resolved(outcome) => {
                self.line("")?;
                self.line("*** Results ***")?;
                self.line(outcome_message(outcome))
            }
        }
    }
}
