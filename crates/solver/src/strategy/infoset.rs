use cfrd_core::Probability;
use serde::Deserialize;
use serde::Serialize;

/// Per-action weights at one information set.
///
/// Indexed by action position, independent of which concrete edge sits
/// at that position. During learning the weights are an unnormalized
/// accumulator; [`InfoStrategy::normalize`] turns them into a
/// distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoStrategy(Vec<Probability>);

impl From<Vec<Probability>> for InfoStrategy {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl InfoStrategy {
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.; n])
    }
    pub fn uniform(n: usize) -> Self {
        Self(vec![1. / n as Probability; n])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn weights(&self) -> &[Probability] {
        &self.0
    }
    /// Weight at `index`, zero when never recorded.
    pub fn get(&self, index: usize) -> Probability {
        self.0.get(index).copied().unwrap_or(0.)
    }
    pub fn mass(&self) -> Probability {
        self.0.iter().sum()
    }
    pub fn add(&mut self, index: usize, weight: Probability) {
        if index >= self.0.len() {
            self.0.resize(index + 1, 0.);
        }
        self.0[index] += weight;
    }
    /// Elementwise sum of raw weights.
    pub fn merge(&mut self, other: &Self) {
        for (index, weight) in other.0.iter().enumerate() {
            self.add(index, *weight);
        }
    }
    /// Rescale to sum to one; massless weights become uniform.
    pub fn normalize(&mut self) {
        let mass = self.mass();
        if mass > 0. {
            self.0.iter_mut().for_each(|w| *w /= mass);
        } else if !self.0.is_empty() {
            *self = Self::uniform(self.0.len());
        }
    }
    pub fn normalized(&self) -> Self {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }
}
