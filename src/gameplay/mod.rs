pub mod board;
pub use board::*;

pub mod config;
pub use config::*;

pub mod game;
pub use game::*;

pub mod refusal;
pub use refusal::*;
