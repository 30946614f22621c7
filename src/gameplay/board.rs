use crate::groups::Group;

/// The shared table: a row of groups laid out empty at game start.
///
/// Groups are never destroyed, only emptied, so an index names the same
/// group for the whole game. When every group is occupied a fresh empty one
/// is appended rather than refusing a new group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Group>);

impl Board {
    pub fn new(n: usize) -> Self {
        Self(vec![Group::empty(); n])
    }
    pub fn groups(&self) -> &[Group] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Panics on an index past the end of the board.
    pub fn group(&self, index: usize) -> &Group {
        &self.0[index]
    }
    /// Panics on an index past the end of the board.
    pub fn group_mut(&mut self, index: usize) -> &mut Group {
        &mut self.0[index]
    }
    /// Cards laid on the board.
    pub fn size(&self) -> usize {
        self.0.iter().map(Group::size).sum()
    }
    /// Every group is empty, a triplet, or a complete flush.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Group::is_valid)
    }
    /// Nothing was laid down this turn.
    pub fn is_frozen(&self) -> bool {
        self.0.iter().all(Group::is_frozen)
    }
    pub fn freeze(&mut self) {
        self.0.iter_mut().for_each(Group::freeze);
    }
    /// Index of the first empty group, or of the group that would be
    /// appended if none is empty.
    pub fn vacancy(&self) -> usize {
        self.0
            .iter()
            .position(Group::is_empty)
            .unwrap_or(self.0.len())
    }
    /// Grows the board so that `index` names a group.
    pub fn reserve(&mut self, index: usize) {
        if index >= self.0.len() {
            self.0.resize(index + 1, Group::empty());
        }
    }
}

impl From<Vec<Group>> for Board {
    fn from(groups: Vec<Group>) -> Self {
        Self(groups)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, group) in self.0.iter().enumerate().filter(|(_, g)| !g.is_empty()) {
            writeln!(f, "#{:<3}{} {}", i, group, group.shape())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn group(s: &str) -> Group {
        Card::parse(s).unwrap().into_iter().collect()
    }

    #[test]
    fn fresh_board_is_valid_and_frozen() {
        let board = Board::new(crate::BOARD_GROUPS);
        assert!(board.is_valid());
        assert!(board.is_frozen());
        assert_eq!(board.vacancy(), 0);
    }

    #[test]
    fn one_bad_group_spoils_the_board() {
        let board = Board::from(vec![group("Kh Ks Kd"), group("2h 3h 5h")]);
        assert!(!board.is_valid());
    }

    #[test]
    fn vacancy_appends_when_full() {
        let mut board = Board::from(vec![group("Kh Ks Kd"), Group::empty()]);
        assert_eq!(board.vacancy(), 1);
        board.group_mut(1).add(Card::try_from("2c").unwrap());
        assert_eq!(board.vacancy(), 2);
        board.reserve(2);
        assert_eq!(board.len(), 3);
        assert!(board.group(2).is_empty());
    }

    #[test]
    fn freezing_freezes_every_group() {
        let mut board = Board::from(vec![group("Kh Ks Kd"), group("2h 3h 4h")]);
        assert!(!board.is_frozen());
        board.freeze();
        assert!(board.is_frozen());
    }
}
