pub mod exhaustive;
pub use exhaustive::*;

pub mod greedy;
pub use greedy::*;

pub mod moves;
pub use moves::*;

pub mod snapshot;
pub use snapshot::*;

pub mod strategy;
pub use strategy::*;


use crate::cards::Hand;
use crate::gameplay::Board;

/// Greedy suggestions for `hand` against `board`, in the order they must
/// be applied. Neither argument is touched.
pub fn generate_moves(hand: &Hand, board: &Board) -> Vec<Move> {
    Search::from(&Snapshot::new(hand, board)).run().moves
}
