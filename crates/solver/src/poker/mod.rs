//! Kuhn and Leduc poker, the reference games for tests and benchmarks.
//!
//! Both are one-bet-per-round games over a small deck of ranks:
//! Kuhn deals one card each from three ranks and bets once, Leduc
//! deals from two copies of three ranks and adds a public board card
//! before a second, larger betting round.

mod edge;
mod game;
mod history;
mod info;
mod percept;
mod table;

pub use edge::*;
pub use game::*;
pub use history::*;
pub use info::*;
pub use percept::*;
pub use table::*;

#[cfg(test)]
mod tests;
