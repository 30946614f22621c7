use super::card::Card;

/// Hand represents an unordered set of physical Cards.
///
/// Stored as a u128 bitstring where the LSB 104 bits each mark one physical
/// card, so both copies of a (rank, suit) can be present at once. Iteration
/// always yields cards in ascending byte order, which is what makes every
/// search over a hand deterministic.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u128);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    /// Every card in the deck.
    pub fn full() -> Self {
        Self(Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn has_card(&self, card: &Card) -> bool {
        self.0 & u128::from(*card) != 0
    }
    pub fn add(&mut self, card: Card) {
        assert!(!self.has_card(&card), "{} already in hand", card);
        self.0 |= u128::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        assert!(self.has_card(&card), "{} not in hand", card);
        self.0 &= !u128::from(card);
    }
    pub fn union(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(*self)
    }

    const fn mask() -> u128 {
        (1u128 << crate::DECK_SIZE) - 1
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(card)
        }
    }
}

/// u128 isomorphism
impl From<u128> for Hand {
    fn from(n: u128) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u128 {
    fn from(h: Hand) -> Self {
        h.0
    }
}
impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u128::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u128::from).fold(0u128, |a, b| a | b))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards();
        for (i, card) in cards.iter().enumerate() {
            match i {
                0 => write!(f, "{}", card)?,
                _ => write!(f, " {}", card)?,
            }
        }
        Ok(())
    }
}
