use crate::*;
use cfrd_core::Probability;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Mapping from information set to per-action weights.
///
/// Grown incrementally and never shrunk while learning. The same type
/// carries the unnormalized average-strategy accumulator during CFR
/// and the normalized strategy handed to players and evaluators.
///
/// # Views
///
/// - `distribution()` — Normalized probabilities with uniform fallback
/// - `retain()` — Restriction to one player's information sets
/// - `replace()` — Overlay of another strategy (subgame substitution)
/// - `project()` — Re-keying, e.g. from gadget to game information sets
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy<I>
where
    I: CfrInfo,
{
    table: HashMap<I, InfoStrategy>,
}

impl<I> Default for Strategy<I>
where
    I: CfrInfo,
{
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<I> FromIterator<(I, InfoStrategy)> for Strategy<I>
where
    I: CfrInfo,
{
    fn from_iter<T: IntoIterator<Item = (I, InfoStrategy)>>(iter: T) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl<I> Strategy<I>
where
    I: CfrInfo,
{
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn contains(&self, info: &I) -> bool {
        self.table.contains_key(info)
    }
    pub fn get(&self, info: &I) -> Option<&InfoStrategy> {
        self.table.get(info)
    }
    pub fn infos(&self) -> impl Iterator<Item = &I> {
        self.table.keys()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&I, &InfoStrategy)> {
        self.table.iter()
    }
    pub fn set(&mut self, info: I, weights: InfoStrategy) {
        self.table.insert(info, weights);
    }
    pub fn add(&mut self, info: I, index: usize, weight: Probability) {
        self.table.entry(info).or_default().add(index, weight);
    }
    /// Folds one iteration's policy deltas into the accumulator.
    pub fn learn<W>(&mut self, info: I, deltas: &[Probability], epoch: usize)
    where
        W: PolicySchedule,
    {
        let weights = self
            .table
            .entry(info)
            .or_insert_with(|| InfoStrategy::zeros(deltas.len()));
        let learned = deltas
            .iter()
            .enumerate()
            .map(|(index, delta)| W::learn(weights.get(index), *delta, epoch))
            .collect::<Vec<_>>();
        *weights = InfoStrategy::from(learned);
    }
    /// Normalize every information set in place.
    pub fn normalize(&mut self) {
        self.table.values_mut().for_each(InfoStrategy::normalize);
    }
    pub fn normalized(&self) -> Self {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }
    /// Union with `other`, summing raw weights where both are defined.
    pub fn merge(&mut self, other: &Self) {
        for (info, weights) in other.iter() {
            self.table.entry(info.clone()).or_default().merge(weights);
        }
    }
    /// Overlay `other`, replacing any information set it defines.
    pub fn replace(&mut self, other: &Self) {
        for (info, weights) in other.iter() {
            self.table.insert(info.clone(), weights.clone());
        }
    }
    /// Only the information sets owned by `seat`.
    pub fn retain(&self, seat: Turn) -> Self {
        self.iter()
            .filter(|(info, _)| info.seat() == seat)
            .map(|(info, weights)| (info.clone(), weights.clone()))
            .collect()
    }
    /// Re-key through `f`, dropping information sets it maps to `None`.
    pub fn project<J, F>(&self, f: F) -> Strategy<J>
    where
        J: CfrInfo,
        F: Fn(&I) -> Option<J>,
    {
        self.iter()
            .filter_map(|(info, weights)| f(info).map(|j| (j, weights.clone())))
            .collect()
    }
    /// Normalized probabilities over `n` actions.
    ///
    /// Actions never recorded carry zero weight. Undefined, massless, or
    /// oversized information sets are uniform.
    pub fn distribution(&self, info: &I, n: usize) -> Vec<Probability> {
        match self.table.get(info) {
            Some(weights) if weights.len() <= n && weights.mass() > 0. => {
                let mass = weights.mass();
                (0..n).map(|index| weights.get(index) / mass).collect()
            }
            _ => InfoStrategy::uniform(n).weights().to_vec(),
        }
    }
    /// Normalized probability of the action at `index` out of `n`.
    pub fn probability(&self, info: &I, index: usize, n: usize) -> Probability {
        self.distribution(info, n).get(index).copied().unwrap_or(0.)
    }
}

impl<I> Strategy<I>
where
    I: CfrInfo + Serialize + DeserializeOwned,
{
    /// Opaque JSON blob of every information set and its weights.
    pub fn to_json(&self) -> CfrResult<String> {
        let entries = self.table.iter().collect::<Vec<_>>();
        Ok(serde_json::to_string(&entries)?)
    }
    pub fn from_json(json: &str) -> CfrResult<Self> {
        let entries = serde_json::from_str::<Vec<(I, InfoStrategy)>>(json)?;
        Ok(entries.into_iter().collect())
    }
}
