use super::*;
use crate::*;
use cfrd_core::Probability;
use cfrd_core::Utility;
use std::sync::Arc;

/// Shared, immutable description of one gadget.
#[derive(Debug)]
pub struct Root<G>
where
    G: CfrGame,
{
    range: Range<G>,
    alternatives: Option<Vec<Utility>>,
    villain: Turn,
}

/// Game state wrapper that adds the CFR-D gadget above a subgame.
///
/// The gadget structure:
/// 1. Root phase: chance selects candidate `i` with its range weight
/// 2. Choice phase: the villain follows into candidate `i` or terminates
///    with the alternative value derived from its counterfactual value
/// 3. Real phase: normal subgame play proceeds
///
/// An open gadget has no alternatives and goes straight from the root
/// into the real subgame, which is how initial resolves are framed.
#[derive(Debug, Clone)]
pub struct Gadget<G>
where
    G: CfrGame,
{
    root: Arc<Root<G>>,
    phase: Phase<G>,
}

impl<G> PartialEq for Gadget<G>
where
    G: CfrGame,
{
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase
    }
}

impl<G> Eq for Gadget<G> where G: CfrGame {}

impl<G> std::hash::Hash for Gadget<G>
where
    G: CfrGame,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.phase.hash(state);
    }
}

impl<G> Gadget<G>
where
    G: CfrGame,
{
    /// Gadget without alternatives.
    pub fn open(range: Range<G>, villain: Turn) -> Self {
        Self::from(Root {
            range,
            alternatives: None,
            villain,
        })
    }
    /// Gadget whose villain may take its counterfactual value instead.
    ///
    /// Candidate `i`'s alternative is the villain's CFV for its
    /// information set at `i`, divided by `cfv_norm` and by the total
    /// range weight of that information set (1 when that weight is 0).
    /// A missing CFV entry counts as zero.
    pub fn new(range: Range<G>, cfv: &Cfv<G::I>, villain: Turn, cfv_norm: Utility) -> Self {
        let mut reach = std::collections::HashMap::<G::I, Probability>::new();
        for (state, p) in range.states() {
            *reach.entry(state.info(villain)).or_default() += p;
        }
        let alternatives = range
            .states()
            .iter()
            .map(|(state, _)| {
                let info = state.info(villain);
                let value = cfv.get(&info).copied().unwrap_or_else(|| {
                    log::debug!("no counterfactual value for {:?}", info);
                    0.
                });
                let reach = match reach.get(&info).copied().unwrap_or(0.) {
                    r if r == 0. => 1.,
                    r => r,
                };
                value / cfv_norm / reach
            })
            .collect();
        Self::from(Root {
            range,
            alternatives: Some(alternatives),
            villain,
        })
    }
    fn from(root: Root<G>) -> Self {
        Self {
            root: Arc::new(root),
            phase: Phase::Root,
        }
    }
    fn with(&self, phase: Phase<G>) -> Self {
        Self {
            root: self.root.clone(),
            phase,
        }
    }

    pub fn phase(&self) -> &Phase<G> {
        &self.phase
    }
    pub fn range(&self) -> &Range<G> {
        &self.root.range
    }
    pub fn villain(&self) -> Turn {
        self.root.villain
    }
    pub fn alternatives(&self) -> Option<&[Utility]> {
        self.root.alternatives.as_deref()
    }
    /// The real game state, once past the gadget phases.
    pub fn inner(&self) -> Option<&G> {
        match &self.phase {
            Phase::Real(g) => Some(g),
            _ => None,
        }
    }
}

impl<G> CfrGame for Gadget<G>
where
    G: CfrGame,
{
    type E = GadgetEdge<G::E>;
    type P = G::P;
    type I = GadgetInfo<G::I>;
    fn turn(&self) -> Turn {
        match &self.phase {
            Phase::Root => Turn::Chance,
            Phase::Choice(_) => self.root.villain,
            Phase::Quit(_) => Turn::Terminal,
            Phase::Real(g) => g.turn(),
        }
    }
    fn choices(&self) -> Vec<Self::E> {
        match &self.phase {
            Phase::Root => (0..self.root.range.len()).map(GadgetEdge::Select).collect(),
            Phase::Choice(_) => vec![GadgetEdge::Follow, GadgetEdge::Terminate],
            Phase::Quit(_) => vec![],
            Phase::Real(g) => g.choices().into_iter().map(GadgetEdge::Inner).collect(),
        }
    }
    fn apply(&self, edge: Self::E) -> Self {
        match (&self.phase, edge) {
            (Phase::Root, GadgetEdge::Select(i)) => match self.root.alternatives {
                Some(_) => self.with(Phase::Choice(i)),
                None => self.with(Phase::Real(self.root.range.state(i).clone())),
            },
            (Phase::Choice(i), GadgetEdge::Follow) => {
                self.with(Phase::Real(self.root.range.state(*i).clone()))
            }
            (Phase::Choice(i), GadgetEdge::Terminate) => self.with(Phase::Quit(*i)),
            (Phase::Real(g), GadgetEdge::Inner(e)) => self.with(Phase::Real(g.apply(e))),
            _ => panic!("invalid edge for current phase"),
        }
    }
    fn payoff(&self, turn: Turn) -> Utility {
        match &self.phase {
            Phase::Quit(i) => {
                let value = self
                    .root
                    .alternatives
                    .as_ref()
                    .map(|alts| alts[*i])
                    .unwrap_or_default();
                if turn == self.root.villain {
                    value
                } else {
                    -value
                }
            }
            Phase::Real(g) => g.payoff(turn),
            _ => panic!("gadget phase has no payoff"),
        }
    }
    fn chances(&self) -> Policy<Self::E> {
        match &self.phase {
            Phase::Root => (0..self.root.range.len())
                .map(|i| (GadgetEdge::Select(i), self.root.range.probability(i)))
                .collect(),
            Phase::Real(g) => g
                .chances()
                .into_iter()
                .map(|(e, p)| (GadgetEdge::Inner(e), p))
                .collect(),
            _ => vec![],
        }
    }
    fn percepts(&self, edge: Self::E) -> Vec<Self::P> {
        match (&self.phase, edge) {
            (Phase::Real(g), GadgetEdge::Inner(e)) => g.percepts(e),
            _ => vec![],
        }
    }
    fn info(&self, turn: Turn) -> Self::I {
        match &self.phase {
            Phase::Root => GadgetInfo::Root(turn),
            Phase::Choice(i) if turn == self.root.villain => {
                GadgetInfo::Choice(self.root.range.state(*i).info(turn))
            }
            Phase::Choice(i) | Phase::Quit(i) => {
                GadgetInfo::Inner(self.root.range.state(*i).info(turn))
            }
            Phase::Real(g) => GadgetInfo::Inner(g.info(turn)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deals() -> Vec<Poker> {
        let root = Poker::new(KUHN);
        root.chances()
            .into_iter()
            .flat_map(|(a, _)| {
                let first = root.apply(a);
                first
                    .chances()
                    .into_iter()
                    .map(move |(b, _)| first.apply(b))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn root_probabilities_sum_to_one() {
        let range = Range::new(
            deals()
                .into_iter()
                .enumerate()
                .map(|(i, g)| (g, 1. + i as f64))
                .collect(),
        );
        let gadget = Gadget::new(range, &Cfv::new(), Turn::P1, 1.);
        let mass = gadget.chances().iter().map(|(_, p)| p).sum::<f64>();
        assert!((mass - 1.).abs() < 1e-12);
        assert_eq!(gadget.chances().len(), 6);
    }

    #[test]
    fn single_state_is_certain() {
        let state = deals()[0];
        let gadget = Gadget::new(Range::single(state), &Cfv::new(), Turn::P2, 1.);
        assert_eq!(gadget.chances(), vec![(GadgetEdge::Select(0), 1.)]);
        let choice = gadget.apply(GadgetEdge::Select(0));
        assert_eq!(choice.turn(), Turn::P2);
        let real = choice.apply(GadgetEdge::Follow);
        assert_eq!(real.inner(), Some(&state));
    }

    #[test]
    fn alternatives_share_information_sets() {
        // villain P2 holds rank 2 in both candidates
        let a = Poker::new(KUHN).apply(Edge::Draw(0)).apply(Edge::Draw(2));
        let b = Poker::new(KUHN).apply(Edge::Draw(1)).apply(Edge::Draw(2));
        let c = Poker::new(KUHN).apply(Edge::Draw(2)).apply(Edge::Draw(1));
        let range = Range::new(vec![(a, 0.25), (b, 0.75), (c, 0.)]);
        let cfv = Cfv::from([(a.info(Turn::P2), 2.)]);
        let gadget = Gadget::new(range, &cfv, Turn::P2, 2.);
        let alternatives = gadget.alternatives().unwrap();
        assert_eq!(alternatives[0], 1.);
        assert_eq!(alternatives[1], 1.);
        // missing entry and zero reach
        assert_eq!(alternatives[2], 0.);
        let quit = gadget
            .apply(GadgetEdge::Select(1))
            .apply(GadgetEdge::Terminate);
        assert!(quit.is_terminal());
        assert_eq!(quit.payoff(Turn::P2), 1.);
        assert_eq!(quit.payoff(Turn::P1), -1.);
    }

    #[test]
    fn open_skips_choice() {
        let root = Poker::new(KUHN);
        let gadget = Gadget::open(Range::single(root), Turn::P2);
        let real = gadget.apply(GadgetEdge::Select(0));
        assert_eq!(real.inner(), Some(&root));
        assert!(real.is_chance());
        assert_eq!(real.info(Turn::P1), GadgetInfo::Inner(root.info(Turn::P1)));
    }

    #[test]
    #[should_panic(expected = "invalid edge")]
    fn wrong_phase_panics() {
        let gadget = Gadget::open(Range::single(deals()[0]), Turn::P2);
        gadget.apply(GadgetEdge::Follow);
    }
}
