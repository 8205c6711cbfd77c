use crate::*;
use std::collections::HashMap;

/// Groups the resolving player's next decision states into subgames.
///
/// Two states belong to the same subgame when either player cannot
/// tell them apart, transitively. Components are kept with a
/// union-find over state indices.
#[derive(Debug, Clone)]
pub struct SubgameMap<G>
where
    G: CfrGame,
{
    hero: Turn,
    states: Vec<G>,
    parent: Vec<usize>,
    heroes: HashMap<G::I, usize>,
    villains: HashMap<G::I, usize>,
}

impl<G> SubgameMap<G>
where
    G: CfrGame,
{
    pub fn new(hero: Turn) -> Self {
        Self {
            hero,
            states: Vec::new(),
            parent: Vec::new(),
            heroes: HashMap::new(),
            villains: HashMap::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.states.len()
    }
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
    pub fn states(&self) -> &[G] {
        &self.states
    }
    pub fn add(&mut self, state: G) {
        let index = self.states.len();
        let hero = state.info(self.hero);
        let villain = state.info(self.hero.opponent());
        self.states.push(state);
        self.parent.push(index);
        let heroes = *self.heroes.entry(hero).or_insert(index);
        let villains = *self.villains.entry(villain).or_insert(index);
        self.union(index, heroes);
        self.union(index, villains);
    }
    /// All states in the subgame containing the hero information set.
    pub fn subgame(&self, info: &G::I) -> Option<Vec<G>> {
        let root = self.find(*self.heroes.get(info)?);
        Some(
            (0..self.states.len())
                .filter(|i| self.find(*i) == root)
                .map(|i| self.states[i].clone())
                .collect(),
        )
    }
    fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }
    fn union(&mut self, a: usize, b: usize) {
        let a = self.find(a);
        let b = self.find(b);
        if a != b {
            self.parent[a.max(b)] = a.min(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(p1: u8, p2: u8) -> Poker {
        Poker::new(KUHN).apply(Edge::Draw(p1)).apply(Edge::Draw(p2))
    }

    #[test]
    fn connected_through_either_player() {
        let mut map = SubgameMap::new(Turn::P1);
        // P1 J vs Q, P1 J vs K share P1's info; P1 Q vs K shares P2's info with J vs K
        map.add(deal(0, 1));
        map.add(deal(0, 2));
        map.add(deal(1, 2));
        map.add(deal(2, 0).apply(Edge::Check));
        let j = deal(0, 1).info(Turn::P1);
        let q = deal(1, 2).info(Turn::P1);
        assert_eq!(map.subgame(&j).map(|s| s.len()), Some(3));
        assert_eq!(map.subgame(&q), map.subgame(&j));
        let other = deal(2, 0).apply(Edge::Check).info(Turn::P1);
        assert_eq!(map.subgame(&other).map(|s| s.len()), Some(1));
        assert_eq!(map.subgame(&deal(2, 1).info(Turn::P1)), None);
    }
}
