use super::*;
use crate::*;
use cfrd_core::Utility;
use std::collections::HashMap;

/// Range and opponent counterfactual values at `roots` under a fixed
/// full-game `strategy`.
///
/// Walks the whole game from `root`. Each time a subgame root is hit,
/// its value under `strategy` is weighted by chance and `hero` reach
/// and added to the opponent's information set there, and the same
/// weight becomes the root's range probability. The range norm is 1.
pub fn summarize<G>(
    root: &G,
    strategy: &Strategy<G::I>,
    hero: Turn,
    roots: &[G],
) -> CfrResult<(Range<G>, Cfv<G::I>)>
where
    G: CfrGame,
{
    let index = roots
        .iter()
        .enumerate()
        .map(|(i, g)| (g.clone(), i))
        .collect::<HashMap<_, _>>();
    let mut summary = Summary {
        hero,
        index,
        strategy,
        weights: vec![0.; roots.len()],
        cfv: Cfv::new(),
    };
    summary.walk(&Tracker::init(hero, root.clone()))?;
    let states = roots.iter().cloned().zip(summary.weights).collect();
    Ok((Range::with_norm(states, 1.), summary.cfv))
}

/// Every reachable state where `seat` acts, in pre-order.
pub fn decisions<G>(root: &G, seat: Turn) -> Vec<G>
where
    G: CfrGame,
{
    let mut found = Vec::new();
    let mut stack = vec![root.clone()];
    while let Some(game) = stack.pop() {
        if game.turn() == seat {
            found.push(game.clone());
        }
        let children = match game.turn() {
            Turn::Terminal => vec![],
            Turn::Chance => game.chances().into_iter().map(|(e, _)| e).collect(),
            _ => game.choices(),
        };
        stack.extend(children.into_iter().rev().map(|e| game.apply(e)));
    }
    found
}

struct Summary<'a, G>
where
    G: CfrGame,
{
    hero: Turn,
    index: HashMap<G, usize>,
    strategy: &'a Strategy<G::I>,
    weights: Vec<Utility>,
    cfv: Cfv<G::I>,
}

impl<G> Summary<'_, G>
where
    G: CfrGame,
{
    /// Player-1 value of the subtree, recording every root met on the way.
    fn walk(&mut self, tracker: &Tracker<G>) -> CfrResult<Utility> {
        let game = tracker.game();
        let utility = match game.turn() {
            Turn::Terminal => tracker.payoff(Turn::P1),
            Turn::Chance => {
                let mut utility = 0.;
                for (edge, p) in game.chances() {
                    utility += p * self.walk(&tracker.next(edge, p)?)?;
                }
                utility
            }
            turn => {
                let edges = game.choices();
                let policy = self.strategy.distribution(&game.info(turn), edges.len());
                let mut utility = 0.;
                for (edge, p) in edges.into_iter().zip(policy) {
                    utility += p * self.walk(&tracker.next(edge, p)?)?;
                }
                utility
            }
        };
        if let Some(&i) = self.index.get(game) {
            let weight = tracker.chance() * tracker.reach(self.hero);
            let villain = self.hero.opponent();
            self.weights[i] += weight;
            *self.cfv.entry(game.info(villain)).or_default() += weight * villain.sign() * utility;
        }
        Ok(utility)
    }
}
