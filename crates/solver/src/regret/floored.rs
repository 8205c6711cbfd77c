//! CFR+ regret update strategy.

use super::*;

/// CFR+ regret update strategy.
///
/// Floors regrets at zero after each update, so an action that turns
/// good again is picked up immediately instead of paying off old debt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlooredRegret;

impl RegretSchedule for FlooredRegret {
    fn gain(accumulated: Utility, immediate: Utility, _: usize) -> Utility {
        (accumulated + immediate).max(0.0)
    }
}
