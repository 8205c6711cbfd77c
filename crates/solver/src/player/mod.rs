//! Match-facing players.

mod player;
mod random;
mod resolving;

pub use player::*;
pub use random::*;
pub use resolving::*;
