//! Strategy representation and regret storage.

mod infoset;
mod regret;
mod strategy;

pub use infoset::*;
pub use regret::*;
pub use strategy::*;
