use crate::gameplay::Game;
use std::fmt::Debug;

/// Someone who takes whole turns at the table.
///
/// `play` is called when the game hands this seat the turn and returns once
/// the turn has ended successfully.
pub trait Player: Debug {
    fn name(&self) -> &str;
    fn play(&self, game: &mut Game) -> anyhow::Result<()>;
}
