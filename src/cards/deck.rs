use super::card::Card;
use super::hand::Hand;
use rand::Rng;
use rand::seq::SliceRandom;

/// A shuffled stack of physical cards, dealt from the top.
///
/// The shuffle happens exactly once, at construction. Running out of cards
/// is a normal state of the game: [`Deck::draw`] simply returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// All 104 cards, shuffled by the given source of randomness.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Hand::full().cards();
        cards.shuffle(rng);
        Self(cards)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Takes the top card, if any remain.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
}

/// a stacked deck, top card last
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}
