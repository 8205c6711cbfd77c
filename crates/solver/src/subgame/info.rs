use crate::*;

/// Information set for gadget-augmented games.
///
/// At the follow/terminate choice the opponent knows only its own
/// information set in the selected candidate, so choices are shared
/// exactly where the real game would share them.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum GadgetInfo<I>
where
    I: CfrInfo,
{
    /// Gadget root, seen by the given player.
    Root(Turn),
    /// Opponent's follow/terminate decision.
    Choice(I),
    /// Inner game info set.
    Inner(I),
}

impl<I> GadgetInfo<I>
where
    I: CfrInfo,
{
    pub fn inner(&self) -> Option<&I> {
        match self {
            Self::Inner(i) => Some(i),
            _ => None,
        }
    }
}

impl<I> CfrInfo for GadgetInfo<I>
where
    I: CfrInfo,
{
    type E = GadgetEdge<I::E>;
    type P = I::P;
    fn seat(&self) -> Turn {
        match self {
            Self::Root(turn) => *turn,
            Self::Choice(i) | Self::Inner(i) => i.seat(),
        }
    }
    fn choices(&self) -> Vec<Self::E> {
        match self {
            Self::Root(_) => vec![],
            Self::Choice(_) => vec![GadgetEdge::Follow, GadgetEdge::Terminate],
            Self::Inner(i) => i.choices().into_iter().map(GadgetEdge::Inner).collect(),
        }
    }
    fn apply(&self, edge: Self::E) -> Self {
        match (self, edge) {
            (Self::Inner(i), GadgetEdge::Inner(e)) => Self::Inner(i.apply(e)),
            (Self::Choice(i), GadgetEdge::Follow) => Self::Inner(i.clone()),
            _ => panic!("invalid edge for current phase"),
        }
    }
    fn perceive(&self, percept: &Self::P) -> Self {
        match self {
            Self::Inner(i) => Self::Inner(i.perceive(percept)),
            other => other.clone(),
        }
    }
}
