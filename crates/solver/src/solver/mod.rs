//! Full-enumeration CFR.

mod accumulate;
mod cfr;
mod visitor;

pub use accumulate::*;
pub use cfr::*;
pub use visitor::*;
