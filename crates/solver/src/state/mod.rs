//! Game model primitives.

mod edge;
mod game;
mod info;
mod percept;
mod turn;

pub use edge::*;
pub use game::*;
pub use info::*;
pub use percept::*;
pub use turn::*;
