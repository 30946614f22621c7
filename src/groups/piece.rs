use crate::cards::Card;

/// A card in play on the board, or lifted off it, together with whether it
/// was already on the board when the current turn began.
///
/// Frozen pieces may move between groups but may not return to a hand. A
/// piece only loses its frost by leaving the board for a hand, and only the
/// turn-end transition ever sets it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Piece {
    card: Card,
    frozen: bool,
}

impl Piece {
    /// A card laid down this turn.
    pub fn fresh(card: Card) -> Self {
        Self {
            card,
            frozen: false,
        }
    }
    pub fn frozen(card: Card) -> Self {
        Self { card, frozen: true }
    }
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl From<Piece> for Card {
    fn from(piece: Piece) -> Self {
        piece.card
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.frozen {
            true => write!(f, "{}*", self.card),
            false => write!(f, "{}", self.card),
        }
    }
}
