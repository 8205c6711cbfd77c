//! Policy weighting and chance distributions.

mod constant;
mod exponential;
mod linear;
mod quadratic;

pub use constant::*;
pub use exponential::*;
pub use linear::*;
pub use quadratic::*;

use cfrd_core::*;

/// A distribution over edges, as offered by chance nodes.
pub type Policy<E> = Vec<(E, Probability)>;

/// Trait for strategy weighting schemes in CFR.
///
/// Decides how much each iteration's reach-weighted policy contributes
/// to the average strategy.
pub trait PolicySchedule {
    /// Folds one iteration's policy weight into the accumulated weight.
    fn learn(accumulated: Probability, immediate: Probability, epoch: usize) -> Probability;
}
