use super::*;
use crate::*;
use std::time::Duration;

/// Plays uniformly at random over its legal actions.
pub struct RandomPlayer<G>
where
    G: CfrGame,
{
    hidden: G::I,
    sampler: Sampler,
}

impl<G> RandomPlayer<G>
where
    G: CfrGame,
{
    pub fn new(root: &G, seat: Turn, seed: u64) -> Self {
        Self {
            hidden: root.info(seat),
            sampler: Sampler::new(seed),
        }
    }
}

impl<G> Player<G> for RandomPlayer<G>
where
    G: CfrGame,
{
    fn seat(&self) -> Turn {
        self.hidden.seat()
    }
    fn init(&mut self, _: Duration) -> CfrResult<()> {
        Ok(())
    }
    fn act(&mut self, _: Duration) -> CfrResult<G::E> {
        let edge = self
            .sampler
            .uniform(&self.hidden.choices())
            .ok_or_else(|| CfrError::IllegalAction(format!("no choices at {:?}", self.hidden)))?;
        self.hidden = self.hidden.apply(edge);
        Ok(edge)
    }
    fn force_action(&mut self, edge: G::E, _: Duration) -> CfrResult<()> {
        legal(&self.hidden, &edge)?;
        self.hidden = self.hidden.apply(edge);
        Ok(())
    }
    fn receive_percept(&mut self, percept: &G::P) {
        if percept.observed_by(self.seat()) {
            self.hidden = self.hidden.perceive(percept);
        }
    }
}
