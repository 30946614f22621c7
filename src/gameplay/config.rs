use crate::search::Strategy;

/// Everything a new game needs to know up front.
///
/// Passed explicitly into [`Game::new`](super::Game::new); nothing in the
/// crate reads configuration from anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Empty groups on the fresh board.
    pub board_groups: usize,
    /// Search used for robot turns and hints.
    pub strategy: Strategy,
    /// Fixes the shuffle. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: crate::STARTING_HAND,
            board_groups: crate::BOARD_GROUPS,
            strategy: Strategy::default(),
            seed: None,
        }
    }
}
