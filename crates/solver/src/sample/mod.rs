//! Seeded sampling and utility estimation.

mod estimator;
mod nextturn;
mod playout;
mod sampler;

pub use estimator::*;
pub use nextturn::*;
pub use playout::*;
pub use sampler::*;
