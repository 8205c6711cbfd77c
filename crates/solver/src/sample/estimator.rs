use crate::*;
use cfrd_core::Utility;

/// A utility estimate and the number of states visited to produce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub utility: Utility,
    pub visited: usize,
}

/// Estimates player-1 utility at a tracker instead of traversing below it.
///
/// The solver asks `can_estimate` at every state it enters and, when the
/// answer is yes, uses the estimate in place of the subtree's value.
pub trait Estimator<G>: Send
where
    G: CfrGame,
{
    fn can_estimate(&self, tracker: &Tracker<G>) -> bool;
    fn estimate(&mut self, tracker: &Tracker<G>) -> CfrResult<Estimate>;
}
