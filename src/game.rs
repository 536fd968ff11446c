use serde::Serialize;
use tracing::{debug, info};

use crate::{
    deck::Deck,
    error::GameError,
    hand::Hand,
    rules::{CardValue, BLACKJACK, DEALER_STANDS_ON},
    table::{Action, RoundEvent, Table},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    pub fn player_won(self) -> bool {
        matches!(self, Outcome::DealerBust | Outcome::PlayerWins)
    }

    pub fn player_lost(self) -> bool {
        matches!(self, Outcome::PlayerBust | Outcome::DealerWins)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundPhase {
    Dealing,
    PlayerTurn,
    PlayerBust,
    DealerTurn,
    Resolved,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub outcome: Outcome,
    pub player_cards: Hand,
    pub dealer_cards: Hand,
    pub player_score: u32,
    pub dealer_score: u32,
    pub dealer_up_card: Option<CardValue>,
}

/// Winner rule, checked in order: player bust, dealer bust, higher score, tie.
pub fn determine_outcome(player_score: u32, dealer_score: u32) -> Outcome {
    if player_score > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_score > BLACKJACK {
        Outcome::DealerBust
    } else if player_score > dealer_score {
        Outcome::PlayerWins
    } else if player_score < dealer_score {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

pub struct BlackjackGame {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: RoundPhase,
}

impl BlackjackGame {
    pub fn new(deck: Deck) -> Self {
        BlackjackGame {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: RoundPhase::Dealing,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    fn enter(&mut self, phase: RoundPhase) {
        debug!(from = ?self.phase, to = ?phase, "round phase change");
        self.phase = phase;
    }

    /// Player, player, dealer, dealer.
    pub fn deal(&mut self) -> Result<(), GameError> {
        debug_assert_eq!(self.phase, RoundPhase::Dealing);
        self.player.push(self.deck.draw()?);
        self.player.push(self.deck.draw()?);
        self.dealer.push(self.deck.draw()?);
        self.dealer.push(self.deck.draw()?);
        self.enter(RoundPhase::PlayerTurn);
        Ok(())
    }

    pub fn play_player_turn<T: Table>(&mut self, table: &mut T) -> Result<(), GameError> {
        loop {
            table.show_hands(&self.player, &self.dealer, false)?;
            if self.player.is_bust() {
                self.enter(RoundPhase::PlayerBust);
                table.announce(RoundEvent::PlayerBust)?;
                return Ok(());
            }
            match table.choose_action(&self.player, &self.dealer)? {
                Some(Action::Hit) => {
                    let card = self.deck.draw()?;
                    self.player.push(card);
                }
                Some(Action::Stand) => {
                    table.announce(RoundEvent::PlayerStands)?;
                    self.enter(RoundPhase::DealerTurn);
                    return Ok(());
                }
                None => {}
            }
        }
    }

    /// Dealer draws while under the stand threshold. Never asks for input.
    pub fn play_dealer_turn<T: Table>(&mut self, table: &mut T) -> Result<(), GameError> {
        table.announce(RoundEvent::DealerTurn)?;
        while self.dealer.score() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer.push(card);
        }
        if self.dealer.is_bust() {
            table.announce(RoundEvent::DealerBust)?;
        }
        Ok(())
    }

    pub fn resolve<T: Table>(&mut self, table: &mut T) -> Result<RoundReport, GameError> {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        self.enter(RoundPhase::Resolved);

        table.show_hands(&self.player, &self.dealer, true)?;
        let outcome = determine_outcome(player_score, dealer_score);
        info!(?outcome, player_score, dealer_score, "round resolved");
        table.announce(RoundEvent::Resolved(outcome))?;

        Ok(RoundReport {
            outcome,
            player_cards: self.player.clone(),
            dealer_cards: self.dealer.clone(),
            player_score,
            dealer_score,
            dealer_up_card: self.dealer.up_card(),
        })
    }

    pub fn play<T: Table>(&mut self, table: &mut T) -> Result<RoundReport, GameError> {
        self.deal()?;
        self.play_player_turn(table)?;
        if self.phase == RoundPhase::DealerTurn {
            self.play_dealer_turn(table)?;
        }
        self.resolve(table)
    }
}
