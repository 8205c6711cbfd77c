//! Continual re-solving for two-player zero-sum imperfect-information games.
//!
//! This facade crate re-exports the workspace crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, tuning constants, configuration, logging
//! - [`solver`] — CFR, the CFR-D gadget, the resolver, evaluation, players

pub use cfrd_core   as core;
pub use cfrd_solver as solver;

// Re-export commonly used types at the root
pub use cfrd_core::*;
