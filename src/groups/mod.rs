pub mod classifier;
pub use classifier::*;

pub mod group;
pub use group::*;

pub mod piece;
pub use piece::*;

pub mod shape;
pub use shape::*;

pub mod slot;
pub use slot::*;
