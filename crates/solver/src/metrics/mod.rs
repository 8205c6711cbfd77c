//! Resolve budgets and observability.

mod aggregate;
mod budget;
mod listener;
mod progress;
mod stopwatch;

pub use aggregate::*;
pub use budget::*;
pub use listener::*;
pub use progress::*;
pub use stopwatch::*;
