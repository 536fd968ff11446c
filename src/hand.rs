use std::fmt;

use serde::Serialize;

use crate::rules::{CardValue, ACE, ACE_REDUCTION, BLACKJACK};

/// Best total for `hand` and whether an Ace is still counted as 11.
pub fn hand_value(hand: &[CardValue]) -> (u32, bool) {
    let mut total: u32 = hand.iter().map(|&card| u32::from(card)).sum();
    let mut aces = hand.iter().filter(|&&card| card == ACE).count();

    while total > BLACKJACK && aces > 0 {
        total -= ACE_REDUCTION;
        aces -= 1;
    }

    (total, aces > 0)
}

pub fn score(hand: &[CardValue]) -> u32 {
    hand_value(hand).0
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<CardValue>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<CardValue>) -> Self {
        Hand { cards }
    }

    pub fn push(&mut self, card: CardValue) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> u32 {
        score(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    pub fn up_card(&self) -> Option<CardValue> {
        self.cards.first().copied()
    }

    /// Renders the first card and hides the rest, e.g. `[10, X]`.
    pub fn masked(&self) -> String {
        let shown: Vec<String> = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| if i == 0 { card.to_string() } else { "X".to_string() })
            .collect();
        format!("[{}]", shown.join(", "))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "[{}]", shown.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn aces_drop_to_one_only_as_needed() {
        assert_eq!(score(&[11, 11]), 12);
        assert_eq!(score(&[11, 11, 11, 11]), 14);
        assert_eq!(score(&[10, 11]), 21);
        assert_eq!(score(&[10, 10, 11]), 21);
        assert_eq!(score(&[11, 6]), 17);
    }

    #[test]
    fn bust_without_aces_stays_over() {
        assert_eq!(score(&[10, 10, 5]), 25);
        assert_eq!(score(&[10, 10, 11, 11]), 22);
    }

    #[test]
    fn score_ignores_card_order() {
        let hand = [11, 5, 10, 11, 2];
        let mut reversed = hand;
        reversed.reverse();
        assert_eq!(score(&hand), score(&reversed));
        assert_eq!(score(&hand), score(&hand));
    }

    #[test]
    fn soft_flag_tracks_unreduced_ace() {
        assert_eq!(hand_value(&[11, 6]), (17, true));
        assert_eq!(hand_value(&[11, 6, 10]), (17, false));
        assert_eq!(hand_value(&[9, 8]), (17, false));
    }

    #[test]
    fn display_and_mask() {
        let hand = Hand::from_cards(vec![10, 6, 5]);
        assert_eq!(hand.to_string(), "[10, 6, 5]");
        assert_eq!(hand.masked(), "[10, X, X]");
        assert_eq!(hand.up_card(), Some(10));
        assert!(!hand.is_bust());
    }
}
