use crate::*;
use cfrd_core::Probability;

/// Where one next-decision state came from.
#[derive(Debug, Clone)]
struct Entry<G>
where
    G: CfrGame,
{
    state: G,
    first: Option<(G::I, usize)>,
    chance: Probability,
}

/// Reach bookkeeping for every next-decision state found by a resolve.
///
/// Each state records the chance-and-range probability of reaching it
/// and the resolving player's first information set and top action on
/// the way. Combined with the resolved strategy this gives the range of
/// the next resolve.
#[derive(Debug, Clone)]
pub struct NextRange<G>
where
    G: CfrGame,
{
    entries: Vec<Entry<G>>,
}

impl<G> Default for NextRange<G>
where
    G: CfrGame,
{
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<G> NextRange<G>
where
    G: CfrGame,
{
    pub fn add(&mut self, state: G, first: Option<(G::I, usize)>, chance: Probability) {
        self.entries.push(Entry {
            state,
            first,
            chance,
        });
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Range over `states`, weighted by chance and the top action's
    /// probability under `strategy`.
    pub fn range(&self, states: &[G], strategy: &Strategy<G::I>) -> Range<G> {
        let subgame = states.iter().collect::<std::collections::HashSet<_>>();
        Range::new(
            self.entries
                .iter()
                .filter(|entry| subgame.contains(&entry.state))
                .map(|entry| {
                    let p = match &entry.first {
                        Some((info, index)) => {
                            strategy.probability(info, *index, info.choices().len())
                        }
                        None => 1.,
                    };
                    (entry.state.clone(), entry.chance * p)
                })
                .collect(),
        )
    }
}
