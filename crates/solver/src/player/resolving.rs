use super::*;
use crate::*;
use cfrd_core::Config;
use std::time::Duration;

/// Plays by continual re-solving.
///
/// `init` resolves from the start of the hand. Every later decision
/// re-solves only the current subgame, seeded with the range and the
/// opponent counterfactual values of the previous resolve, then picks
/// an action from the resolved strategy with the player's own sampler.
pub struct ResolvingPlayer<G, R = SummedRegret, W = ConstantWeight>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    root: G,
    hidden: G::I,
    resolver: Resolver<G, R, W>,
    sampler: Sampler,
    iterations: Option<usize>,
    last: Option<Outcome<G>>,
}

impl<G, R, W> ResolvingPlayer<G, R, W>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    pub fn new(root: G, seat: Turn, config: Config) -> Self {
        Self {
            hidden: root.info(seat),
            sampler: Sampler::new(config.seed),
            resolver: Resolver::new(seat, config),
            iterations: None,
            last: None,
            root,
        }
    }
    pub fn with_listener(mut self, listener: Box<dyn ResolvingListener<G>>) -> Self {
        self.resolver = self.resolver.with_listener(listener);
        self
    }
    /// Caps every resolve at `iterations` on top of the time budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn hidden(&self) -> &G::I {
        &self.hidden
    }
    pub fn outcome(&self) -> Option<&Outcome<G>> {
        self.last.as_ref()
    }

    /// The offered time, capped by the configured `limit`.
    fn budget(&self, time: Duration, limit: Duration) -> Budget {
        let budget = Budget::from(time.min(limit));
        match self.iterations {
            Some(n) => budget.with_iterations(n),
            None => budget,
        }
    }
    fn resolve(&mut self, time: Duration) -> CfrResult<Outcome<G>> {
        let budget = self.budget(time, self.resolver.config().act_budget());
        let last = self.last.as_ref().ok_or(CfrError::Uninitialized)?;
        let range = last.range(&self.hidden).inspect_err(|e| {
            log::warn!("{:?} cannot resolve: {}", self.resolver.hero(), e);
        })?;
        self.resolver.act(&self.hidden, range, &last.cfv, budget)
    }
}

impl<G, R, W> Player<G> for ResolvingPlayer<G, R, W>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    fn seat(&self) -> Turn {
        self.resolver.hero()
    }
    fn init(&mut self, budget: Duration) -> CfrResult<()> {
        let budget = self.budget(budget, self.resolver.config().init_budget());
        self.last = Some(self.resolver.init(self.root.clone(), budget)?);
        Ok(())
    }
    fn act(&mut self, budget: Duration) -> CfrResult<G::E> {
        let outcome = self.resolve(budget)?;
        let choices = self.hidden.choices();
        let policy = outcome.strategy.distribution(&self.hidden, choices.len());
        let (index, _) = self
            .sampler
            .weighted(&policy)
            .ok_or_else(|| CfrError::UnknownInfoSet(format!("{:?}", self.hidden)))?;
        let edge = choices[index];
        self.hidden = self.hidden.apply(edge);
        self.last = Some(outcome);
        Ok(edge)
    }
    fn force_action(&mut self, edge: G::E, budget: Duration) -> CfrResult<()> {
        legal(&self.hidden, &edge)?;
        let outcome = self.resolve(budget)?;
        self.hidden = self.hidden.apply(edge);
        self.last = Some(outcome);
        Ok(())
    }
    fn receive_percept(&mut self, percept: &G::P) {
        if percept.observed_by(self.seat()) {
            self.hidden = self.hidden.perceive(percept);
        }
    }
}
