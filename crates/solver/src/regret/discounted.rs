//! Discounted CFR (DCFR) regret update strategy.

use super::*;

/// Discounted CFR (DCFR) regret update strategy.
///
/// Applies asymmetric discounting to positive and negative regrets,
/// with stronger discounting for negative regrets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRegret;

impl DiscountedRegret {
    const ALPHA: Utility = 1.5;
    const BETA: Utility = 0.5;
    const PERIOD: usize = 1;
}

impl RegretSchedule for DiscountedRegret {
    fn gain(accumulated: Utility, immediate: Utility, epoch: usize) -> Utility {
        let t = epoch as Utility;
        let p = Self::PERIOD as Utility;
        let x = if (epoch % Self::PERIOD) != 0 {
            return accumulated + immediate;
        } else if accumulated > 0.0 {
            (t / p).powf(Self::ALPHA)
        } else if accumulated < 0.0 {
            (t / p).powf(Self::BETA)
        } else {
            t / p
        };
        let discount = x / (x + 1.0);
        (accumulated * discount + immediate).max(REGRET_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_regret_decays_faster() {
        let up = DiscountedRegret::gain(10., 0., 4);
        let down = DiscountedRegret::gain(-10., 0., 4);
        assert!(up > 10. * 0.85);
        assert!(down.abs() < 10. * 0.7);
    }
}
