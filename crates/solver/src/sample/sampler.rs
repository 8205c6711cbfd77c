use cfrd_core::Probability;
use rand::Rng;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// Per-instance random source.
///
/// Every component that needs randomness owns one of these, seeded
/// explicitly, so any run is reproducible from its seeds.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Uniformly chosen index below `n`.
    pub fn index(&mut self, n: usize) -> Option<usize> {
        (n > 0).then(|| self.rng.random_range(0..n))
    }
    /// Uniformly chosen option.
    pub fn uniform<T>(&mut self, options: &[T]) -> Option<T>
    where
        T: Clone,
    {
        self.index(options.len()).map(|i| options[i].clone())
    }
    /// Index drawn proportionally to `weights`, with its normalized probability.
    pub fn weighted(&mut self, weights: &[Probability]) -> Option<(usize, Probability)> {
        let index = WeightedIndex::<Probability>::new(weights).ok()?.sample(&mut self.rng);
        let total = weights.iter().sum::<Probability>();
        Some((index, weights[index] / total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_runs_repeat() {
        let mut a = Sampler::new(7);
        let mut b = Sampler::new(7);
        let xs = (0..32).map(|_| a.index(10)).collect::<Vec<_>>();
        let ys = (0..32).map(|_| b.index(10)).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }

    #[test]
    fn weighted_skips_zero_mass() {
        let mut sampler = Sampler::new(1);
        for _ in 0..100 {
            let (index, p) = sampler.weighted(&[0., 2., 0., 6.]).unwrap();
            assert!(index == 1 || index == 3);
            assert!(p == 0.25 || p == 0.75);
        }
        assert!(sampler.weighted(&[0., 0.]).is_none());
        assert!(sampler.weighted(&[]).is_none());
    }

    #[test]
    fn empty_options() {
        let mut sampler = Sampler::new(1);
        assert_eq!(sampler.uniform::<u8>(&[]), None);
        assert_eq!(sampler.index(0), None);
    }
}
