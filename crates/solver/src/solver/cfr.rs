use crate::*;
use cfrd_core::Probability;
use cfrd_core::Utility;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Full-enumeration CFR over any [`CfrGame`].
///
/// One call to [`Cfr::run_iteration`] walks every branch below a tracker,
/// updating both players' regrets in the same pass. At a decision node
/// every legal action is expanded; each action's regret grows by the
/// difference between its value and the node's value, weighted by the
/// counterfactual reach of everyone but the acting player. Chance nodes
/// are weighted by their probability and accumulate no regret.
///
/// - `R` — [`RegretSchedule`] for regret accumulation/discounting
/// - `W` — [`PolicySchedule`] for average-strategy weighting
///
/// # Batch Commit
///
/// Regret and policy deltas are buffered per information set and only
/// committed once the traversal completes. Every visit within one
/// iteration therefore sees the same current strategy, and a fault
/// anywhere in the walk leaves the tables untouched.
pub struct Cfr<G, R = SummedRegret, W = ConstantWeight>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    regrets: RegretTable<G::I>,
    average: Strategy<G::I>,
    filter: Accumulate<G::I>,
    estimator: Option<Box<dyn Estimator<G>>>,
    epochs: usize,
    visits: usize,
    phantom: PhantomData<fn() -> (R, W)>,
}

/// One iteration's uncommitted deltas.
struct Pending<I> {
    regrets: HashMap<I, Vec<Utility>>,
    policies: HashMap<I, Vec<Probability>>,
}

impl<I> Default for Pending<I> {
    fn default() -> Self {
        Self {
            regrets: HashMap::new(),
            policies: HashMap::new(),
        }
    }
}

impl<G, R, W> Default for Cfr<G, R, W>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    fn default() -> Self {
        Self::new(Accumulate::All)
    }
}

impl<G, R, W> Cfr<G, R, W>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    pub fn new(filter: Accumulate<G::I>) -> Self {
        Self {
            regrets: RegretTable::default(),
            average: Strategy::default(),
            filter,
            estimator: None,
            epochs: 0,
            visits: 0,
            phantom: PhantomData,
        }
    }
    pub fn with_estimator(mut self, estimator: Box<dyn Estimator<G>>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    /// Unnormalized cumulative average strategy.
    pub fn average(&self) -> &Strategy<G::I> {
        &self.average
    }
    /// Normalized average strategy.
    pub fn strategy(&self) -> Strategy<G::I> {
        self.average.normalized()
    }
    pub fn regrets(&self) -> &RegretTable<G::I> {
        &self.regrets
    }
    pub fn epochs(&self) -> usize {
        self.epochs
    }
    /// States entered across all iterations, estimator playouts included.
    pub fn visits(&self) -> usize {
        self.visits
    }
    /// Average positive regret per iteration.
    pub fn regret(&self) -> Utility {
        self.regrets.positive() / self.epochs.max(1) as Utility
    }

    /// Run `iterations` plain iterations from a game root.
    pub fn train(&mut self, root: &G, iterations: usize) -> CfrResult<()> {
        let tracker = Tracker::init(Turn::P1, root.clone());
        for _ in 0..iterations {
            self.run_iteration(&tracker, &mut ())?;
        }
        Ok(())
    }

    /// One full traversal below `tracker`. Returns player-1 utility.
    pub fn run_iteration<V>(&mut self, tracker: &Tracker<G>, visitor: &mut V) -> CfrResult<Utility>
    where
        V: Visitor<G>,
    {
        let mut pending = Pending::default();
        let utility = self.traverse(tracker, visitor, &mut pending)?;
        self.commit(pending);
        Ok(utility)
    }

    fn commit(&mut self, pending: Pending<G::I>) {
        self.epochs += 1;
        let epoch = self.epochs;
        for (info, deltas) in pending.regrets {
            self.regrets.gain::<R>(info, &deltas, epoch);
        }
        for (info, deltas) in pending.policies {
            self.average.learn::<W>(info, &deltas, epoch);
        }
    }

    fn traverse<V>(
        &mut self,
        tracker: &Tracker<G>,
        visitor: &mut V,
        pending: &mut Pending<G::I>,
    ) -> CfrResult<Utility>
    where
        V: Visitor<G>,
    {
        self.visits += 1;
        visitor.enter(tracker, &self.average);
        let utility = match self.estimate(tracker)? {
            Some(utility) => utility,
            None => match tracker.game().turn() {
                Turn::Terminal => tracker.payoff(Turn::P1),
                Turn::Chance => self.chance(tracker, visitor, pending)?,
                turn => self.decide(tracker, turn, visitor, pending)?,
            },
        };
        visitor.leave(tracker, utility);
        Ok(utility)
    }

    fn estimate(&mut self, tracker: &Tracker<G>) -> CfrResult<Option<Utility>> {
        match self.estimator.as_mut() {
            Some(estimator) if estimator.can_estimate(tracker) => {
                let estimate = estimator.estimate(tracker)?;
                self.visits += estimate.visited;
                Ok(Some(estimate.utility))
            }
            _ => Ok(None),
        }
    }

    fn chance<V>(
        &mut self,
        tracker: &Tracker<G>,
        visitor: &mut V,
        pending: &mut Pending<G::I>,
    ) -> CfrResult<Utility>
    where
        V: Visitor<G>,
    {
        let mut utility = 0.;
        for (edge, p) in tracker.game().chances() {
            let child = tracker.next(edge, p)?;
            utility += p * self.traverse(&child, visitor, pending)?;
        }
        Ok(utility)
    }

    fn decide<V>(
        &mut self,
        tracker: &Tracker<G>,
        turn: Turn,
        visitor: &mut V,
        pending: &mut Pending<G::I>,
    ) -> CfrResult<Utility>
    where
        V: Visitor<G>,
    {
        let info = tracker.game().info(turn);
        let edges = tracker.game().choices();
        let n = edges.len();
        let policy = self.regrets.matched(&info, n);
        let mut values = Vec::with_capacity(n);
        for (edge, p) in edges.into_iter().zip(policy.iter()) {
            let child = tracker.next(edge, *p)?;
            values.push(self.traverse(&child, visitor, pending)?);
        }
        let utility = policy.iter().zip(&values).map(|(p, v)| p * v).sum::<Utility>();
        let weight = turn.sign() * tracker.counterfactual(turn);
        let regrets = pending
            .regrets
            .entry(info.clone())
            .or_insert_with(|| vec![0.; n]);
        for (regret, value) in regrets.iter_mut().zip(&values) {
            *regret += weight * (value - utility);
        }
        if self.filter.accepts(&info) {
            let reach = tracker.reach(turn);
            let policies = pending.policies.entry(info).or_insert_with(|| vec![0.; n]);
            for (weight, p) in policies.iter_mut().zip(&policy) {
                *weight += reach * p;
            }
        }
        Ok(utility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_is_zero_sum_bounded() {
        let mut cfr = Cfr::<Poker>::default();
        let root = Tracker::init(Turn::P1, Poker::new(KUHN));
        let utility = cfr.run_iteration(&root, &mut ()).unwrap();
        assert!(utility.abs() <= 2.);
        assert_eq!(cfr.epochs(), 1);
        assert!(cfr.visits() > 0);
        assert!(!cfr.regrets().is_empty());
    }

    #[test]
    fn filter_limits_average() {
        let mut cfr = Cfr::<Poker>::new(Accumulate::nothing());
        cfr.train(&Poker::new(KUHN), 3).unwrap();
        assert!(cfr.average().is_empty());
        assert!(!cfr.regrets().is_empty());
    }

    #[test]
    fn average_is_normalized() {
        let mut cfr = Cfr::<Poker>::default();
        cfr.train(&Poker::new(KUHN), 50).unwrap();
        let strategy = cfr.strategy();
        assert_eq!(strategy.len(), 12);
        for (_, weights) in strategy.iter() {
            assert!((weights.mass() - 1.).abs() < 1e-9);
        }
    }

    struct Counter(usize, usize);
    impl Visitor<Poker> for Counter {
        fn enter(&mut self, _: &Tracker<Poker>, _: &Strategy<Info>) {
            self.0 += 1;
        }
        fn leave(&mut self, _: &Tracker<Poker>, _: Utility) {
            self.1 += 1;
        }
    }

    #[test]
    fn visitor_sees_every_state() {
        let mut cfr = Cfr::<Poker>::default();
        let mut counter = Counter(0, 0);
        cfr.run_iteration(&Tracker::init(Turn::P1, Poker::new(KUHN)), &mut counter)
            .unwrap();
        assert_eq!(counter.0, counter.1);
        assert_eq!(counter.0, cfr.visits());
        // 1 + 3 + 6 deals, then 9 betting states under each of the 6 deals
        assert_eq!(counter.0, 1 + 3 + 6 * 9);
    }

    #[test]
    fn estimator_cuts_traversal() {
        let mut cfr = Cfr::<Poker>::default().with_estimator(Box::new(NextTurn::new(
            RandomPlayout::new(1, 3),
        )));
        let mut counter = Counter(0, 0);
        let root = Tracker::init(Turn::P2, Poker::new(KUHN));
        cfr.run_iteration(&root, &mut counter).unwrap();
        // P1's first decision is expanded, P2's is estimated
        assert_eq!(counter.0, 1 + 3 + 6 * 3);
    }
}
