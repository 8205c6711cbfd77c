use crate::*;
use cfrd_core::Probability;
use cfrd_core::Utility;
use std::collections::HashMap;

/// Cumulative per-action regret for every visited information set.
///
/// The current strategy is always regret matching over these values:
/// each action's probability is proportional to its positive regret,
/// uniform when no action has positive regret.
#[derive(Debug, Clone)]
pub struct RegretTable<I>
where
    I: CfrInfo,
{
    table: HashMap<I, Vec<Utility>>,
}

impl<I> Default for RegretTable<I>
where
    I: CfrInfo,
{
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<I> RegretTable<I>
where
    I: CfrInfo,
{
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn regret(&self, info: &I) -> Option<&[Utility]> {
        self.table.get(info).map(|r| r.as_slice())
    }
    /// Regret-matched policy over `n` actions.
    pub fn matched(&self, info: &I, n: usize) -> Vec<Probability> {
        let positive = match self.table.get(info) {
            Some(regrets) => regrets.iter().map(|r| r.max(0.)).collect::<Vec<_>>(),
            None => return vec![1. / n as Probability; n],
        };
        let sum = positive.iter().sum::<Utility>();
        if sum > 0. {
            positive.into_iter().map(|r| r / sum).collect()
        } else {
            vec![1. / n as Probability; n]
        }
    }
    /// Folds one iteration's deltas into the cumulative regret.
    pub fn gain<R>(&mut self, info: I, deltas: &[Utility], epoch: usize)
    where
        R: RegretSchedule,
    {
        let regrets = self
            .table
            .entry(info)
            .or_insert_with(|| vec![0.; deltas.len()]);
        for (regret, delta) in regrets.iter_mut().zip(deltas) {
            *regret = R::gain(*regret, *delta, epoch);
        }
    }
    /// Sum of positive cumulative regret over all actions.
    pub fn positive(&self) -> Utility {
        self.table
            .values()
            .flat_map(|r| r.iter())
            .map(|r| r.max(0.))
            .sum()
    }
}
