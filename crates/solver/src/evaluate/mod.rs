//! Offline measurement of strategies against best responses, and of
//! resolving players over played hands.
mod matches;
mod response;
mod tree;

pub use matches::*;
pub use response::*;
pub use tree::*;
