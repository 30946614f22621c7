use crate::cards::Card;
use colored::*;
use std::fmt::{Display, Formatter, Result};

/// An end card taken off an existing group to complete a new one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Borrow {
    pub source: usize,
    pub card: Card,
}

/// One suggested step of a turn.
///
/// Group indices refer to the board the move was planned against. A new group
/// always lands on an empty group (or one past the end of the board), so the
/// indices stay meaningful while the moves are replayed in order.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Move {
    /// Lay a new group from hand cards, topped up with at most two borrowed
    /// end cards from large groups.
    FormGroup {
        target: usize,
        hand: Vec<Card>,
        borrowed: Vec<Borrow>,
    },
    /// Lay a single hand card onto an existing group.
    AddToGroup { card: Card, target: usize },
}

impl Move {
    pub fn target(&self) -> usize {
        match self {
            Move::FormGroup { target, .. } | Move::AddToGroup { target, .. } => *target,
        }
    }
    /// Every card that ends up in the target group.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            Move::FormGroup { hand, borrowed, .. } => hand
                .iter()
                .copied()
                .chain(borrowed.iter().map(|b| b.card))
                .collect(),
            Move::AddToGroup { card, .. } => vec![*card],
        }
    }
    /// Cards that leave the acting hand.
    pub fn spent(&self) -> Vec<Card> {
        match self {
            Move::FormGroup { hand, .. } => hand.clone(),
            Move::AddToGroup { card, .. } => vec![*card],
        }
    }
    /// Groups that lend a card to this move.
    pub fn sources(&self) -> Vec<usize> {
        match self {
            Move::FormGroup { borrowed, .. } => borrowed.iter().map(|b| b.source).collect(),
            Move::AddToGroup { .. } => vec![],
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Move::FormGroup {
                target, borrowed, ..
            } if borrowed.is_empty() => {
                let cards = join(&self.cards());
                write!(f, "{} #{:<3} {}", "FORM ".green(), target, cards)
            }
            Move::FormGroup {
                target, borrowed, ..
            } => {
                let cards = join(&self.cards());
                let lent = borrowed
                    .iter()
                    .map(|b| format!("{} from #{}", b.card, b.source))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "{} #{:<3} {} {}",
                    "FORM ".yellow(),
                    target,
                    cards,
                    format!("({})", lent).dimmed()
                )
            }
            Move::AddToGroup { card, target } => {
                write!(f, "{} #{:<3} {}", "ADD  ".cyan(), target, card)
            }
        }
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn borrowed_cards_join_the_new_group() {
        let mv = Move::FormGroup {
            target: 3,
            hand: vec![card("8c"), card("8d")],
            borrowed: vec![Borrow {
                source: 0,
                card: card("8s"),
            }],
        };
        assert_eq!(mv.target(), 3);
        assert_eq!(mv.cards(), vec![card("8c"), card("8d"), card("8s")]);
        assert_eq!(mv.spent(), vec![card("8c"), card("8d")]);
        assert_eq!(mv.sources(), vec![0]);
    }

    #[test]
    fn serde_shape() {
        let mv = Move::AddToGroup {
            card: card("Ks"),
            target: 1,
        };
        let json = serde_json::to_string(&mv).unwrap();
        assert!(json.starts_with("{\"AddToGroup\""));
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }
}
