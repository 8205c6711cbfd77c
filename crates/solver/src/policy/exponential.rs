//! Exponential weighting scheme.

use super::*;

/// Exponential weighting scheme.
///
/// Accumulated weight decays geometrically before each update.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialWeight;

impl ExponentialWeight {
    const DECAY: Probability = 0.9999;
}

impl PolicySchedule for ExponentialWeight {
    fn learn(accumulated: Probability, immediate: Probability, _: usize) -> Probability {
        (accumulated * Self::DECAY + immediate).max(POLICY_MIN)
    }
}
