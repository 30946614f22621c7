use crate::cards::Card;

/// One position in a group's display sequence.
///
/// A gapped flush like `2 3 _ 5` is shown with a [`Slot::Placeholder`]
/// where the missing rank would go. Placeholders exist only in display
/// sequences; they never enter a hand or a group's membership.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Slot {
    Card(Card),
    Placeholder,
}

/// The gap marker. There is only ever this one.
pub const PLACEHOLDER: Slot = Slot::Placeholder;

impl Slot {
    pub fn card(&self) -> Option<Card> {
        match self {
            Slot::Card(card) => Some(*card),
            Slot::Placeholder => None,
        }
    }
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Slot::Placeholder)
    }
}

impl From<Card> for Slot {
    fn from(card: Card) -> Self {
        Slot::Card(card)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Slot::Card(card) => write!(f, "{}", card),
            Slot::Placeholder => write!(f, "__"),
        }
    }
}
