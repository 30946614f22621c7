use super::classifier;
use super::piece::Piece;
use super::shape::Shape;
use super::slot::Slot;
use crate::FULL_GROUP;
use crate::cards::Card;
use crate::cards::Hand;

/// One stack of cards on the board.
///
/// The member set is the source of truth. Every mutation reclassifies it and
/// rebuilds the display sequence in the same call, so the cached [`Shape`]
/// and the display sequence never disagree with the members.
///
/// Frost is tracked per card: the group is frozen when all of its members
/// are, and any fresh card thaws it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    cards: Hand,
    frozen: Hand,
    shape: Shape,
    display: Vec<Slot>,
}

impl Group {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn size(&self) -> usize {
        self.cards.size()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn has_card(&self, card: &Card) -> bool {
        self.cards.has_card(card)
    }
    pub fn cards(&self) -> Vec<Card> {
        self.cards.cards()
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn is_valid(&self) -> bool {
        self.shape.is_valid()
    }
    /// Holds every rank already; no card can extend it.
    pub fn is_full(&self) -> bool {
        self.size() == FULL_GROUP
    }
    /// No card was laid here this turn. Vacuously true when empty.
    pub fn is_frozen(&self) -> bool {
        self.frozen == self.cards
    }
    pub fn display_sequence(&self) -> &[Slot] {
        &self.display
    }
    /// Members in run order, or card order when not a flush.
    pub fn canonical(&self) -> Vec<Card> {
        classifier::canonical(&self.cards())
    }

    /// Lays a card from a hand onto this group.
    pub fn add(&mut self, card: Card) {
        self.put(Piece::fresh(card));
    }
    /// Lays a piece onto this group, keeping its frost.
    pub fn put(&mut self, piece: Piece) {
        self.cards.add(piece.card());
        if piece.is_frozen() {
            self.frozen.add(piece.card());
        }
        self.reconstruct();
    }
    /// Lifts a member off this group. Panics if the card is not a member.
    pub fn remove(&mut self, card: Card) -> Piece {
        self.cards.remove(card);
        let piece = if self.frozen.has_card(&card) {
            self.frozen.remove(card);
            Piece::frozen(card)
        } else {
            Piece::fresh(card)
        };
        self.reconstruct();
        piece
    }
    /// Marks every member as having been on the board before this turn.
    pub fn freeze(&mut self) {
        self.frozen = self.cards;
    }

    /// Recomputes shape and display sequence from the members.
    pub fn reconstruct(&mut self) {
        let cards = self.cards();
        self.shape = classifier::classify(&cards);
        self.display = match self.shape {
            Shape::Empty => Vec::new(),
            Shape::Flush | Shape::Gapped(_) => {
                classifier::attempt_flush(&cards).unwrap_or_default()
            }
            Shape::Triplet | Shape::Scrap => cards.into_iter().map(Slot::from).collect(),
        };
    }
}

impl FromIterator<Card> for Group {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut group = Self::empty();
        group.cards = iter.into_iter().collect();
        group.reconstruct();
        group
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let slots = self
            .display
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        write!(f, "[{}]", slots.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::PLACEHOLDER;

    fn group(s: &str) -> Group {
        Card::parse(s).unwrap().into_iter().collect()
    }
    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn empty_group_is_valid() {
        let group = Group::empty();
        assert!(group.is_valid());
        assert!(group.display_sequence().is_empty());
    }

    #[test]
    fn validity_follows_every_mutation() {
        let mut group = Group::empty();
        group.add(card("2h"));
        assert!(!group.is_valid());
        group.add(card("3h"));
        assert!(!group.is_valid());
        group.add(card("5h"));
        assert_eq!(group.shape(), Shape::Gapped(1));
        assert_eq!(group.display_sequence().len(), 4);
        assert_eq!(group.display_sequence()[2], PLACEHOLDER);
        group.add(card("4h"));
        assert!(group.is_valid());
        assert!(group.display_sequence().iter().all(|s| !s.is_placeholder()));
        group.remove(card("5h"));
        assert_eq!(group.shape(), Shape::Flush);
        group.remove(card("2h"));
        group.remove(card("3h"));
        group.remove(card("4h"));
        assert_eq!(group.shape(), Shape::Empty);
        assert!(group.is_valid());
    }

    #[test]
    fn table_of_groups() {
        assert!(group("Kh Ks Kd").is_valid());
        assert!(!group("2h 3h 5h").is_valid());
        assert!(group("2h 3h 4h 5h").is_valid());
        assert!(!group("Ah As Ah'").is_valid());
    }

    #[test]
    fn reconstruct_is_idempotent() {
        for s in ["Kh Ks Kd", "2h 3h 5h", "Ah As Ah'", "Qc Kc Ac 2c"] {
            let mut group = group(s);
            group.reconstruct();
            let display = group.display_sequence().to_vec();
            let valid = group.is_valid();
            group.reconstruct();
            assert_eq!(group.display_sequence(), display.as_slice());
            assert_eq!(group.is_valid(), valid);
        }
    }

    #[test]
    fn frost_is_per_card() {
        let mut group = group("7c 7d 7h");
        assert!(!group.is_frozen());
        group.freeze();
        assert!(group.is_frozen());
        group.add(card("7s"));
        assert!(!group.is_frozen());
        let piece = group.remove(card("7s"));
        assert!(!piece.is_frozen());
        assert!(group.is_frozen());
        let piece = group.remove(card("7c"));
        assert!(piece.is_frozen());
    }

    #[test]
    fn frozen_pieces_stay_frozen_across_groups() {
        let mut from = group("7c 7d 7h 7s");
        from.freeze();
        let mut into = Group::empty();
        into.put(from.remove(card("7s")));
        assert!(into.is_frozen());
        into.add(card("8s"));
        assert!(!into.is_frozen());
    }

    #[test]
    #[should_panic]
    fn removing_a_stranger_panics() {
        group("Kh Ks Kd").remove(card("Kc"));
    }
}
