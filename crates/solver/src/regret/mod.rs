//! Regret update strategies for CFR variants.

mod discounted;
mod floored;
mod linear;
mod pluribus;
mod summed;

pub use discounted::*;
pub use floored::*;
pub use linear::*;
pub use pluribus::*;
pub use summed::*;

use cfrd_core::*;

/// Trait for regret update strategies in CFR variants.
///
/// Applied once per information set and action at the end of each
/// iteration, to that iteration's summed regret delta.
pub trait RegretSchedule {
    /// Folds one iteration's regret into the cumulative regret.
    fn gain(accumulated: Utility, immediate: Utility, epoch: usize) -> Utility;
}
