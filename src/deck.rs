use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, warn};

use crate::{
    error::GameError,
    rules::{CardValue, DECK_SIZE, RANK_VALUES, SUITS},
};

/// A single 52-card shoe, shuffled once and drawn from the back.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<CardValue>,
}

impl Deck {
    fn unshuffled() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..SUITS {
            cards.extend_from_slice(&RANK_VALUES);
        }
        Deck { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::unshuffled();
        deck.cards.shuffle(rng);
        debug!(cards = deck.cards.len(), "shuffled new deck");
        deck
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Builds a deck that deals `cards` in the given order, first element first.
    pub fn stacked(cards: impl IntoIterator<Item = CardValue>) -> Self {
        let mut cards: Vec<CardValue> = cards.into_iter().collect();
        cards.reverse();
        Deck { cards }
    }

    pub fn draw(&mut self) -> Result<CardValue, GameError> {
        match self.cards.pop() {
            Some(card) => {
                debug!(card, remaining = self.cards.len(), "drew card");
                Ok(card)
            }
            None => {
                warn!("draw attempted on an empty deck");
                Err(GameError::DeckExhausted)
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, last element drawn first.
    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }
}
