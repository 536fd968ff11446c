//! Fixed table rules. The game has no rule variants.

/// Value of a single card. 11 is an Ace.
pub type CardValue = u8;

pub const BLACKJACK: u32 = 21;
pub const DEALER_STANDS_ON: u32 = 17;
pub const ACE: CardValue = 11;
/// Amount an Ace drops by when it is counted as 1.
pub const ACE_REDUCTION: u32 = 10;
pub const DECK_SIZE: usize = 52;
pub const SUITS: usize = 4;

/// One suit's worth of card values: 2..9, four ten-valued cards (10, J, Q, K), Ace.
pub const RANK_VALUES: [CardValue; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, ACE];
