use crate::*;

/// Restricts an estimator to states at or beyond the resolving player's
/// next decision point, turning a full resolve into a depth-limited one.
#[derive(Debug, Clone)]
pub struct NextTurn<E> {
    inner: E,
}

impl<E> NextTurn<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<G, E> Estimator<G> for NextTurn<E>
where
    G: CfrGame,
    E: Estimator<G>,
{
    fn can_estimate(&self, tracker: &Tracker<G>) -> bool {
        tracker.was_next_turn_reached() && self.inner.can_estimate(tracker)
    }
    fn estimate(&mut self, tracker: &Tracker<G>) -> CfrResult<Estimate> {
        self.inner.estimate(tracker)
    }
}
