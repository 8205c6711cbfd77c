use super::*;
use crate::*;
use cfrd_core::Config;
use cfrd_core::Utility;
use std::marker::PhantomData;

/// Budgeted re-solving of the subgame in front of one player.
///
/// Each resolve wraps its subgame in a [`Gadget`], runs CFR iterations
/// until the [`Budget`] runs out, and returns an [`Outcome`]: the
/// normalized strategy, the subgames rooted at the hero's next
/// decisions, their reach bookkeeping, and the villain's counterfactual
/// values there. Those are exactly the inputs of the next resolve.
///
/// - `init` solves from the start of the game, accumulating no average
///   strategy, only the values needed for the first real decision.
/// - `act` solves the current subgame from a [`Range`] and the last
///   counterfactual values, accumulating the average strategy only at
///   the hero's information sets at the subgame root.
///
/// # Counterfactual Values
///
/// Whenever a traversal leaves the hero's next decision point, the
/// villain's utility weighted by chance and hero reach is added to the
/// villain's information set there. The sums are divided by the number
/// of iterations once the budget is spent.
pub struct Resolver<G, R = SummedRegret, W = ConstantWeight>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    hero: Turn,
    config: Config,
    resolves: u64,
    listeners: Vec<Box<dyn ResolvingListener<G>>>,
    phantom: PhantomData<fn() -> (R, W)>,
}

/// Traversal visitor collecting next-turn values and feeding listeners.
struct Collector<'a, G>
where
    G: CfrGame,
{
    hero: Turn,
    hidden: Option<&'a G::I>,
    cfv: &'a mut Cfv<G::I>,
    listeners: &'a mut [Box<dyn ResolvingListener<G>>],
    iterations: usize,
    visited: usize,
}

impl<G> Visitor<Gadget<G>> for Collector<'_, G>
where
    G: CfrGame,
{
    fn enter(&mut self, tracker: &Tracker<Gadget<G>>, average: &Strategy<GadgetInfo<G::I>>) {
        self.visited += 1;
        let info = ResolvingInfo {
            visited: self.visited,
            iterations: self.iterations,
            strategy: average,
            hidden: self.hidden,
        };
        for listener in self.listeners.iter_mut() {
            listener.state_visited(tracker.game(), &info);
        }
    }
    fn leave(&mut self, tracker: &Tracker<Gadget<G>>, utility: Utility) {
        if let (true, Some(state)) = (tracker.is_next_turn(), tracker.game().inner()) {
            let villain = state.info(self.hero.opponent());
            let weight = tracker.chance() * tracker.reach(self.hero);
            *self.cfv.entry(villain).or_default() += weight * -self.hero.sign() * utility;
        }
    }
}

impl<G, R, W> Resolver<G, R, W>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    pub fn new(hero: Turn, config: Config) -> Self {
        Self {
            hero,
            config,
            resolves: 0,
            listeners: Vec::new(),
            phantom: PhantomData,
        }
    }
    pub fn with_listener(mut self, listener: Box<dyn ResolvingListener<G>>) -> Self {
        self.listeners.push(listener);
        self
    }
    pub fn hero(&self) -> Turn {
        self.hero
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initial resolve from the start of the game.
    pub fn init(&mut self, root: G, budget: Budget) -> CfrResult<Outcome<G>> {
        if root.is_terminal() {
            return Err(CfrError::InvalidSubgame(format!("{:?} is terminal", root)));
        }
        let gadget = Gadget::open(Range::single(root), self.hero.opponent());
        let tracker = Tracker::init(self.hero, gadget);
        let outcome = self.resolve(tracker, Accumulate::nothing(), budget, None)?;
        let empty = Strategy::default();
        let info = ResolvingInfo {
            visited: outcome.visited,
            iterations: outcome.iterations,
            strategy: &empty,
            hidden: None,
        };
        for listener in self.listeners.iter_mut() {
            listener.init_end(&info);
        }
        Ok(outcome)
    }

    /// In-game resolve of the subgame containing `hidden`.
    pub fn act(
        &mut self,
        hidden: &G::I,
        range: Range<G>,
        cfv: &Cfv<G::I>,
        budget: Budget,
    ) -> CfrResult<Outcome<G>> {
        range.validate()?;
        if let Some((state, _)) = range.states().iter().find(|(g, _)| g.turn() != self.hero) {
            return Err(CfrError::InvalidSubgame(format!(
                "{:?} is not a {:?} decision",
                state, self.hero
            )));
        }
        let roots = range
            .states()
            .iter()
            .map(|(g, _)| GadgetInfo::Inner(g.info(self.hero)))
            .collect::<std::collections::HashSet<_>>();
        if !roots.contains(&GadgetInfo::Inner(hidden.clone())) {
            return Err(CfrError::UnknownInfoSet(format!("{:?}", hidden)));
        }
        let norm = range.norm();
        let gadget = Gadget::new(range, cfv, self.hero.opponent(), self.config.cfv_norm);
        let tracker = Tracker::act(self.hero, gadget, norm);
        self.resolve(tracker, Accumulate::Only(roots), budget, Some(hidden))
    }

    fn resolve(
        &mut self,
        tracker: Tracker<Gadget<G>>,
        filter: Accumulate<GadgetInfo<G::I>>,
        budget: Budget,
        hidden: Option<&G::I>,
    ) -> CfrResult<Outcome<G>> {
        let empty = Strategy::default();
        let start = ResolvingInfo {
            visited: 0,
            iterations: 0,
            strategy: &empty,
            hidden,
        };
        for listener in self.listeners.iter_mut() {
            listener.resolving_start(&start);
        }
        let villain = self.hero.opponent();
        let mut map = SubgameMap::new(self.hero);
        let mut next = NextRange::default();
        let mut cfv = Cfv::new();
        survey(&tracker, villain, &mut map, &mut next, &mut cfv)?;
        log::debug!(
            "resolving for {:?} over {} root states, {} next decisions",
            self.hero,
            tracker.game().range().len(),
            map.len()
        );

        let mut solver = Cfr::<Gadget<G>, R, W>::new(filter);
        if let Some(playouts) = self.config.playouts {
            let seed = self.config.seed.wrapping_add(self.resolves);
            solver = solver.with_estimator(Box::new(NextTurn::new(RandomPlayout::new(
                playouts, seed,
            ))));
        }
        self.resolves += 1;
        let mut timer = budget.start();
        let mut collector = Collector {
            hero: self.hero,
            hidden,
            cfv: &mut cfv,
            listeners: &mut self.listeners,
            iterations: 0,
            visited: 0,
        };
        while timer.can_continue() {
            timer.start_iteration();
            solver.run_iteration(&tracker, &mut collector)?;
            timer.end_iteration();
            collector.iterations += 1;
            let info = ResolvingInfo {
                visited: collector.visited,
                iterations: collector.iterations,
                strategy: solver.average(),
                hidden,
            };
            for listener in collector.listeners.iter_mut() {
                listener.iteration_end(&info);
            }
        }
        let visited = collector.visited;

        let iterations = timer.iterations();
        cfv.values_mut()
            .for_each(|value| *value /= iterations as Utility);
        let end = ResolvingInfo {
            visited,
            iterations,
            strategy: solver.average(),
            hidden,
        };
        for listener in self.listeners.iter_mut() {
            listener.resolving_end(&end);
        }
        log::debug!(
            "resolved {} iterations, {} states in {:.3}s",
            iterations,
            solver.visits(),
            timer.elapsed().as_secs_f64()
        );
        Ok(Outcome {
            strategy: solver
                .average()
                .normalized()
                .project(|info| info.inner().cloned()),
            map,
            next,
            cfv,
            iterations,
            visited: solver.visits(),
        })
    }
}

/// Finds every next decision of the hero below `tracker`.
fn survey<G>(
    tracker: &Tracker<Gadget<G>>,
    villain: Turn,
    map: &mut SubgameMap<G>,
    next: &mut NextRange<G>,
    cfv: &mut Cfv<G::I>,
) -> CfrResult<()>
where
    G: CfrGame,
{
    let game = tracker.game();
    if game.is_terminal() {
        return Ok(());
    }
    if tracker.is_next_turn() {
        if let Some(state) = game.inner() {
            let first = tracker
                .first()
                .and_then(|(info, index)| info.inner().map(|i| (i.clone(), *index)));
            map.add(state.clone());
            next.add(state.clone(), first, tracker.chance());
            cfv.entry(state.info(villain)).or_insert(0.);
        }
        return Ok(());
    }
    if game.is_chance() {
        for (edge, p) in game.chances() {
            survey(&tracker.next(edge, p)?, villain, map, next, cfv)?;
        }
    } else {
        for edge in game.choices() {
            survey(&tracker.next(edge, 1.)?, villain, map, next, cfv)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(hero: Turn) -> Resolver<Poker> {
        Resolver::new(hero, Config::default())
    }

    #[test]
    fn init_finds_next_decisions() {
        let outcome = resolver(Turn::P2)
            .init(Poker::new(KUHN), Budget::iterations(10))
            .unwrap();
        // six deals, each reaching P2 after a check or a bet
        assert_eq!(outcome.map.len(), 12);
        assert_eq!(outcome.next.len(), 12);
        assert_eq!(outcome.cfv.len(), 6);
        assert_eq!(outcome.iterations, 10);
        assert!(outcome.strategy.is_empty());
    }

    #[test]
    fn next_range_from_init() {
        let outcome = resolver(Turn::P2)
            .init(Poker::new(KUHN), Budget::iterations(10))
            .unwrap();
        let hidden = Poker::new(KUHN)
            .apply(Edge::Draw(0))
            .apply(Edge::Draw(2))
            .apply(Edge::Bet)
            .info(Turn::P2);
        let range = outcome.range(&hidden).unwrap();
        assert_eq!(range.len(), 6);
        for i in 0..range.len() {
            assert!((range.states()[i].1 - 1. / 6.).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_invalid_subgames() {
        let root = Poker::new(KUHN);
        let terminal = root
            .apply(Edge::Draw(0))
            .apply(Edge::Draw(1))
            .apply(Edge::Bet)
            .apply(Edge::Fold);
        assert!(matches!(
            resolver(Turn::P1).init(terminal, Budget::iterations(1)),
            Err(CfrError::InvalidSubgame(_))
        ));
        let hidden = root.info(Turn::P1);
        assert!(matches!(
            resolver(Turn::P1).act(&hidden, Range::single(root), &Cfv::new(), Budget::iterations(1)),
            Err(CfrError::InvalidSubgame(_))
        ));
        assert!(matches!(
            resolver(Turn::P1).act(&hidden, Range::new(vec![]), &Cfv::new(), Budget::iterations(1)),
            Err(CfrError::InvalidSubgame(_))
        ));
    }

    #[test]
    fn single_state_act_is_subgame_solving() {
        let state = Poker::new(KUHN).apply(Edge::Draw(2)).apply(Edge::Draw(0));
        let hidden = state.info(Turn::P1);
        let outcome = resolver(Turn::P1)
            .act(&hidden, Range::single(state), &Cfv::new(), Budget::iterations(200))
            .unwrap();
        assert_eq!(outcome.strategy.len(), 1);
        let policy = outcome.strategy.distribution(&hidden, 2);
        assert!((policy.iter().sum::<f64>() - 1.).abs() < 1e-9);
    }

    #[derive(Default)]
    struct Calls(std::sync::Arc<std::sync::Mutex<Vec<&'static str>>>);
    impl ResolvingListener<Poker> for Calls {
        fn init_end(&mut self, _: &ResolvingInfo<'_, Poker>) {
            self.0.lock().unwrap().push("init");
        }
        fn resolving_start(&mut self, _: &ResolvingInfo<'_, Poker>) {
            self.0.lock().unwrap().push("start");
        }
        fn resolving_end(&mut self, info: &ResolvingInfo<'_, Poker>) {
            assert!(info.visited > 0);
            self.0.lock().unwrap().push("end");
        }
        fn iteration_end(&mut self, _: &ResolvingInfo<'_, Poker>) {
            self.0.lock().unwrap().push("iteration");
        }
    }

    #[test]
    fn listeners_in_lifecycle_order() {
        let calls = Calls::default();
        let log = calls.0.clone();
        resolver(Turn::P1)
            .with_listener(Box::new(calls))
            .init(Poker::new(KUHN), Budget::iterations(2))
            .unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["start", "iteration", "iteration", "end", "init"]
        );
    }

    #[test]
    fn playouts_estimate_past_next_turn() {
        let config = Config {
            playouts: Some(2),
            ..Config::default()
        };
        let outcome = Resolver::<Poker>::new(Turn::P2, config)
            .init(Poker::new(LEDUC), Budget::iterations(3))
            .unwrap();
        assert_eq!(outcome.iterations, 3);
        assert!(!outcome.cfv.is_empty());
        assert!(outcome.cfv.values().all(|v| v.is_finite()));
    }
}
