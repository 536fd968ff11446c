use crate::{error::GameError, game::Outcome, hand::Hand};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

/// Things a round reports to whoever is watching it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    PlayerStands,
    PlayerBust,
    DealerTurn,
    DealerBust,
    Resolved(Outcome),
}

/// The seat a round is played through: where hands are shown, where the
/// player's decision comes from and where events are announced.
pub trait Table {
    fn show_hands(
        &mut self,
        player: &Hand,
        dealer: &Hand,
        reveal_dealer: bool,
    ) -> Result<(), GameError>;

    /// `Ok(None)` means no decision was made; the round shows the hands again
    /// and asks once more.
    fn choose_action(&mut self, player: &Hand, dealer: &Hand) -> Result<Option<Action>, GameError>;

    fn announce(&mut self, event: RoundEvent) -> Result<(), GameError>;
}
