use crate::*;
use cfrd_core::Probability;

/// Candidate states the opponent cannot tell apart, with reach weights.
///
/// The norm is the sum of the weights unless it is given explicitly,
/// for ranges that cover only part of the true mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Range<G>
where
    G: CfrGame,
{
    states: Vec<(G, Probability)>,
    norm: Probability,
}

impl<G> Range<G>
where
    G: CfrGame,
{
    pub fn new(states: Vec<(G, Probability)>) -> Self {
        let norm = states.iter().map(|(_, p)| p).sum();
        Self { states, norm }
    }
    pub fn with_norm(states: Vec<(G, Probability)>, norm: Probability) -> Self {
        Self { states, norm }
    }
    /// A single certain state; re-solving it is plain subgame solving.
    pub fn single(state: G) -> Self {
        Self::new(vec![(state, 1.)])
    }
    pub fn states(&self) -> &[(G, Probability)] {
        &self.states
    }
    pub fn state(&self, index: usize) -> &G {
        &self.states[index].0
    }
    pub fn norm(&self) -> Probability {
        self.norm
    }
    pub fn len(&self) -> usize {
        self.states.len()
    }
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
    /// Normalized weight of the candidate at `index`.
    pub fn probability(&self, index: usize) -> Probability {
        self.states[index].1 / self.norm
    }
    /// Rejects ranges no resolve can start from.
    pub fn validate(&self) -> CfrResult<()> {
        if self.states.is_empty() {
            return Err(CfrError::InvalidSubgame("empty range".into()));
        }
        if !(self.norm > 0.) || self.states.iter().any(|(_, p)| *p < 0.) {
            return Err(CfrError::InvalidSubgame(format!(
                "range norm {} over {} states",
                self.norm,
                self.states.len()
            )));
        }
        match self.states.iter().find(|(g, _)| g.is_terminal() || g.is_chance()) {
            Some((g, _)) => Err(CfrError::InvalidSubgame(format!("{:?} is not a decision", g))),
            None => Ok(()),
        }
    }
}
