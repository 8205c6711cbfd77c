//! Linear regret discounting.

use super::*;

/// Linear regret discounting.
///
/// Older iterations are weighted proportionally less: the accumulated
/// regret is scaled by t/(t+1) before each update.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRegret;

impl RegretSchedule for LinearRegret {
    fn gain(accumulated: Utility, immediate: Utility, epoch: usize) -> Utility {
        let t = epoch as Utility;
        let discount = t / (t + 1.0);
        (accumulated * discount + immediate).max(REGRET_MIN)
    }
}
