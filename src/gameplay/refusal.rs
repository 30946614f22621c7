use crate::cards::Card;

/// Why the game turned down a player action.
///
/// These are ordinary outcomes of play, not faults: the caller reports them
/// and lets the player try something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// A card is already lifted; put it somewhere first.
    PickupOccupied,
    /// Nothing is lifted.
    PickupEmpty,
    /// The card was on the board before this turn and may not enter a hand.
    FrozenCard(Card),
    /// Some group is neither a triplet nor a complete flush.
    InvalidBoard,
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Refusal::PickupOccupied => write!(f, "a card is already lifted"),
            Refusal::PickupEmpty => write!(f, "no card is lifted"),
            Refusal::FrozenCard(card) => write!(f, "{} is frozen on the board", card),
            Refusal::InvalidBoard => write!(f, "the board has an invalid group"),
        }
    }
}

impl std::error::Error for Refusal {}
