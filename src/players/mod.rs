pub mod player;
pub use player::*;

pub mod robot;
pub use robot::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

#[cfg(feature = "cli")]
pub mod mode;
#[cfg(feature = "cli")]
pub use mode::*;
