use super::exhaustive::Exhaustive;
use super::greedy::Plan;
use super::greedy::Search;
use super::snapshot::Snapshot;

/// Which search plans a turn.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Greedy,
    /// Backtracking over hand splits, stacking at most `depth` new groups.
    Exhaustive { depth: usize },
}

impl Strategy {
    pub fn plan(&self, snapshot: &Snapshot) -> Plan {
        match *self {
            Strategy::Greedy => Search::from(snapshot).run(),
            Strategy::Exhaustive { depth } => Exhaustive::new(depth).plan(snapshot),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Exhaustive { depth } => write!(f, "exhaustive (depth {})", depth),
        }
    }
}
