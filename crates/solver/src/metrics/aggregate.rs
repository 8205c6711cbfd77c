use crate::*;

/// Collects the strategies a continual-resolving player actually used.
///
/// Each in-game resolve contributes its normalized subgame strategy,
/// merged by raw mass into one aggregate over the real game. The
/// initial resolve accumulates nothing and is skipped. Measuring the
/// aggregate's exploitability after many hands is how a resolving
/// player is judged as a whole.
#[derive(Debug, Clone)]
pub struct StrategyAggregator<G>
where
    G: CfrGame,
{
    strategy: Strategy<G::I>,
    resolves: usize,
    visited: usize,
}

impl<G> Default for StrategyAggregator<G>
where
    G: CfrGame,
{
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            resolves: 0,
            visited: 0,
        }
    }
}

impl<G> StrategyAggregator<G>
where
    G: CfrGame,
{
    pub fn strategy(&self) -> &Strategy<G::I> {
        &self.strategy
    }
    /// In-game resolves merged so far.
    pub fn resolves(&self) -> usize {
        self.resolves
    }
    /// States visited by the merged resolves.
    pub fn visited(&self) -> usize {
        self.visited
    }
}

impl<G> ResolvingListener<G> for StrategyAggregator<G>
where
    G: CfrGame,
{
    fn resolving_end(&mut self, info: &ResolvingInfo<'_, G>) {
        if info.hidden.is_none() {
            return;
        }
        let resolved = info
            .strategy
            .normalized()
            .project(|gadget| gadget.inner().cloned());
        self.strategy.merge(&resolved);
        self.resolves += 1;
        self.visited += info.visited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfrd_core::Config;
    use std::sync::Arc;
    use std::sync::Mutex;

    #[test]
    fn merges_each_in_game_resolve() {
        let aggregator = Arc::new(Mutex::new(StrategyAggregator::<Poker>::default()));
        let mut resolver = Resolver::<Poker>::new(Turn::P2, Config::default())
            .with_listener(Box::new(aggregator.clone()));
        let init = resolver.init(Poker::new(KUHN), Budget::iterations(200)).unwrap();
        assert_eq!(aggregator.lock().unwrap().resolves(), 0);
        assert!(aggregator.lock().unwrap().strategy().is_empty());

        let king = Poker::new(KUHN)
            .apply(Edge::Draw(0))
            .apply(Edge::Draw(2))
            .apply(Edge::Bet)
            .info(Turn::P2);
        let range = init.range(&king).unwrap();
        let first = resolver
            .act(&king, range.clone(), &init.cfv, Budget::iterations(200))
            .unwrap();
        {
            let aggregator = aggregator.lock().unwrap();
            assert_eq!(aggregator.resolves(), 1);
            assert_eq!(aggregator.visited(), first.visited);
            assert_eq!(aggregator.strategy(), &first.strategy);
        }

        let second = resolver
            .act(&king, range, &init.cfv, Budget::iterations(200))
            .unwrap();
        let aggregator = aggregator.lock().unwrap();
        assert_eq!(aggregator.resolves(), 2);
        for (info, weights) in aggregator.strategy().iter() {
            // two normalized resolves merged by raw mass
            assert!((weights.mass() - 2.).abs() < 1e-9);
            let n = weights.len();
            let merged = aggregator.strategy().distribution(info, n);
            let a = first.strategy.distribution(info, n);
            let b = second.strategy.distribution(info, n);
            for k in 0..n {
                assert!((merged[k] - (a[k] + b[k]) / 2.).abs() < 1e-9);
            }
        }
    }
}
