use super::*;
use crate::*;
use cfrd_core::Probability;
use cfrd_core::Utility;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Exploitability of `strategy` over the full game below `root`.
///
/// `½ Σ_p (BR_p − u_p(σ))`, which for zero-sum games is the mean of
/// both players' best-response values. Zero exactly at equilibrium.
pub fn exploitability<G>(root: &G, strategy: &Strategy<G::I>) -> CfrResult<Utility>
where
    G: CfrGame,
{
    exploitability_with(root, strategy, &mut Strategy::default())
}

/// Exploitability, reusing and filling in best responses.
///
/// Information sets already in `responses` are played as given, so a
/// perturbed or externally computed response can be measured. Every
/// other responder information set gets its computed best action
/// written back as a pure strategy.
pub fn exploitability_with<G>(
    root: &G,
    strategy: &Strategy<G::I>,
    responses: &mut Strategy<G::I>,
) -> CfrResult<Utility>
where
    G: CfrGame,
{
    let tree = Tree::build(root)?;
    let mut gap = 0.;
    for seat in Turn::PLAYERS {
        let mut response = Response::new(&tree, strategy, responses, seat);
        let best = response.value(tree.root());
        let chosen = response.chosen;
        let own = expectation(&tree, strategy, seat);
        log::trace!("{:?} best response {:.6} against {:.6}", seat, best, own);
        gap += best - own;
        for (info, index) in chosen {
            let n = info.choices().len();
            let mut weights = InfoStrategy::zeros(n);
            weights.add(index, 1.);
            responses.set(info, weights);
        }
    }
    Ok(gap / 2.)
}

/// Pure best response of `seat` against `strategy`.
pub fn best_response<G>(root: &G, strategy: &Strategy<G::I>, seat: Turn) -> CfrResult<Strategy<G::I>>
where
    G: CfrGame,
{
    let tree = Tree::build(root)?;
    let fixed = Strategy::default();
    let mut response = Response::new(&tree, strategy, &fixed, seat);
    response.value(tree.root());
    Ok(response
        .chosen
        .into_iter()
        .map(|(info, index)| {
            let mut weights = InfoStrategy::zeros(info.choices().len());
            weights.add(index, 1.);
            (info, weights)
        })
        .collect())
}

/// Expected utility of `seat` when both players follow `strategy`.
fn expectation<G>(tree: &Tree<G>, strategy: &Strategy<G::I>, seat: Turn) -> Utility
where
    G: CfrGame,
{
    let mut values = HashMap::<NodeIndex, Utility>::new();
    for index in tree.bfs().into_iter().rev() {
        let game = tree.game(index);
        let children = tree.children(index);
        let value = match game.turn() {
            Turn::Terminal => game.payoff(seat),
            Turn::Chance => children.iter().map(|(c, _, p)| p * values[c]).sum::<Utility>(),
            turn => strategy
                .distribution(&game.info(turn), children.len())
                .into_iter()
                .zip(&children)
                .map(|(p, (c, _, _))| p * values[c])
                .sum::<Utility>(),
        };
        values.insert(index, value);
    }
    values[&tree.root()]
}

/// One player's best response over a built tree.
///
/// The responder's choice at an information set is a single action for
/// every node in it: each action's value is summed over the nodes,
/// weighted by the reach of chance and the opponent, before taking the
/// maximum. Choices and node values are memoized.
struct Response<'a, G>
where
    G: CfrGame,
{
    tree: &'a Tree<G>,
    strategy: &'a Strategy<G::I>,
    fixed: &'a Strategy<G::I>,
    seat: Turn,
    reach: HashMap<NodeIndex, Probability>,
    infos: HashMap<G::I, Vec<NodeIndex>>,
    values: HashMap<NodeIndex, Utility>,
    chosen: HashMap<G::I, usize>,
}

impl<'a, G> Response<'a, G>
where
    G: CfrGame,
{
    fn new(
        tree: &'a Tree<G>,
        strategy: &'a Strategy<G::I>,
        fixed: &'a Strategy<G::I>,
        seat: Turn,
    ) -> Self {
        let mut reach = HashMap::new();
        reach.insert(tree.root(), 1.);
        for index in tree.bfs() {
            let game = tree.game(index);
            let above = reach[&index];
            let children = tree.children(index);
            let policy = match game.turn() {
                Turn::Terminal => vec![],
                Turn::Chance => children.iter().map(|(_, _, p)| *p).collect(),
                turn if turn == seat => vec![1.; children.len()],
                turn => strategy.distribution(&game.info(turn), children.len()),
            };
            for ((child, _, _), p) in children.iter().zip(policy) {
                reach.insert(*child, above * p);
            }
        }
        Self {
            tree,
            strategy,
            fixed,
            seat,
            reach,
            infos: tree.partition(seat),
            values: HashMap::new(),
            chosen: HashMap::new(),
        }
    }

    /// Responder's utility at `index`.
    fn value(&mut self, index: NodeIndex) -> Utility {
        if let Some(value) = self.values.get(&index) {
            return *value;
        }
        let tree = self.tree;
        let game = tree.game(index);
        let children = tree.children(index);
        let value = match game.turn() {
            Turn::Terminal => game.payoff(self.seat),
            Turn::Chance => children
                .iter()
                .map(|(c, _, p)| p * self.value(*c))
                .sum::<Utility>(),
            turn if turn == self.seat => {
                let info = game.info(turn);
                if self.fixed.contains(&info) {
                    self.fixed
                        .distribution(&info, children.len())
                        .into_iter()
                        .zip(&children)
                        .map(|(p, (c, _, _))| p * self.value(*c))
                        .sum::<Utility>()
                } else {
                    let k = self.choice(info);
                    self.value(children[k].0)
                }
            }
            turn => self
                .strategy
                .distribution(&game.info(turn), children.len())
                .into_iter()
                .zip(&children)
                .map(|(p, (c, _, _))| p * self.value(*c))
                .sum::<Utility>(),
        };
        self.values.insert(index, value);
        value
    }

    /// Best action index at a responder information set.
    fn choice(&mut self, info: G::I) -> usize {
        if let Some(k) = self.chosen.get(&info) {
            return *k;
        }
        let nodes = self.infos.get(&info).cloned().unwrap_or_default();
        let n = info.choices().len();
        let mut scores = vec![0.; n];
        let tree = self.tree;
        for node in nodes {
            let reach = self.reach[&node];
            for (k, (child, _, _)) in tree.children(node).into_iter().enumerate() {
                scores[k] += reach * self.value(child);
            }
        }
        let k = scores
            .iter()
            .enumerate()
            .fold(0, |best, (k, s)| if *s > scores[best] { k } else { best });
        self.chosen.insert(info, k);
        k
    }
}
