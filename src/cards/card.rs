use super::rank::Rank;
use super::suit::Suit;

/// A physical playing card encoded as a single byte.
///
/// The deck holds two copies of every (rank, suit), and the copies are
/// different cards: a hand may hold both and the board may split them across
/// groups. The 104 cards are bijectively mapped to `0..104` where the encoding
/// is `rank * 8 + suit * 2 + copy`, which sorts first by rank, then by suit,
/// then by copy.
///
/// Equality is identity. Use [`Card::rank`] and [`Card::suit`] to compare
/// values.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 8)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 2 % 4)
    }
    /// Which of the two physical copies this is, 0 or 1.
    pub fn copy(&self) -> u8 {
        self.0 % 2
    }
    /// The other physical card with the same rank and suit.
    pub fn twin(&self) -> Card {
        Self(self.0 ^ 1)
    }
}

/// (Rank, Suit) injection onto the first copy
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self::from((r, s, 0))
    }
}
/// (Rank, Suit, copy) isomorphism
impl From<(Rank, Suit, u8)> for Card {
    fn from((r, s, c): (Rank, Suit, u8)) -> Self {
        debug_assert!(c < 2);
        Self(u8::from(r) * 8 + u8::from(s) * 2 + c)
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..104
/// Kh'
/// 93
/// 0b01011101
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!((n as usize) < crate::DECK_SIZE);
        Self(n)
    }
}

/// u128 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u128 {
    fn from(c: Card) -> u128 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
/// "Kh" is the first copy, "Kh'" the second
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (s, copy) = match s.strip_suffix('\'') {
            Some(s) => (s, 1),
            None => (s, 0),
        };
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(u.to_string().as_str())?;
                Ok(Card::from((rank, suit, copy)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace separated card notations into a vector of cards.
    ///
    /// Each card is rank then suit, with a trailing `'` for the second copy.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}
