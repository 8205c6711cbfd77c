use crate::*;

/// Edge type for gadget-augmented games.
///
/// Wraps the inner game's edge type and adds the gadget root's
/// selection and the opponent's follow/terminate choice.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GadgetEdge<E>
where
    E: CfrEdge,
{
    /// Chance selects the candidate state at this index.
    Select(usize),
    /// Opponent enters the real subgame.
    Follow,
    /// Opponent takes its counterfactual value instead.
    Terminate,
    /// Inner game action.
    Inner(E),
}

impl<E> CfrEdge for GadgetEdge<E> where E: CfrEdge {}
