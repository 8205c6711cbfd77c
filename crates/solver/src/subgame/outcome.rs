use super::*;
use crate::*;

/// Everything one resolve hands to the next.
#[derive(Debug, Clone)]
pub struct Outcome<G>
where
    G: CfrGame,
{
    /// Normalized average strategy over the real game's information sets.
    pub strategy: Strategy<G::I>,
    /// Subgames rooted at the resolving player's next decisions.
    pub map: SubgameMap<G>,
    /// Reach bookkeeping for those decisions.
    pub next: NextRange<G>,
    /// Villain counterfactual values at those decisions, per iteration.
    pub cfv: Cfv<G::I>,
    pub iterations: usize,
    pub visited: usize,
}

impl<G> Outcome<G>
where
    G: CfrGame,
{
    /// Range of the subgame the hero information set belongs to.
    pub fn range(&self, hidden: &G::I) -> CfrResult<Range<G>> {
        let states = self
            .map
            .subgame(hidden)
            .ok_or_else(|| CfrError::UnknownInfoSet(format!("{:?}", hidden)))?;
        Ok(self.next.range(&states, &self.strategy))
    }
}
