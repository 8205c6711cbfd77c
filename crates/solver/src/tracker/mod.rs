//! Reach-probability bookkeeping for tree walks.

mod cursor;
mod tracker;

pub use cursor::*;
pub use tracker::*;
