use crate::cards::Card;
use crate::cards::Hand;
use crate::gameplay::Board;
use crate::gameplay::Game;

/// A detached copy of the acting hand and the board, owned by a search.
///
/// Groups keep their board indices, empty ones included, and each holds its
/// cards in canonical order so that the first and last entries are the ends
/// of a run. A lifted card belongs to neither side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub hand: Vec<Card>,
    pub groups: Vec<Vec<Card>>,
}

impl Snapshot {
    pub fn new(hand: &Hand, board: &Board) -> Self {
        Self {
            hand: hand.cards(),
            groups: board.groups().iter().map(|g| g.canonical()).collect(),
        }
    }
    /// Cards laid on the board.
    pub fn placed(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self::new(game.hand(), game.board())
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hand = self.hand.iter().copied().collect::<Hand>();
        writeln!(f, "hand  {}", hand)?;
        for (i, group) in self.groups.iter().enumerate().filter(|(_, g)| !g.is_empty()) {
            let cards = group.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            writeln!(f, "#{:<3}[{}]", i, cards.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Config;

    #[test]
    fn snapshot_excludes_the_lifted_card() {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        let mut game = Game::new(&config);
        let card = game.hand().cards()[0];
        game.try_lift_from_hand(card).unwrap();
        let snapshot = Snapshot::from(&game);
        assert_eq!(snapshot.hand.len(), crate::STARTING_HAND - 1);
        assert!(!snapshot.hand.contains(&card));
        assert_eq!(snapshot.groups.len(), crate::BOARD_GROUPS);
        assert_eq!(snapshot.placed(), 0);
    }
}
