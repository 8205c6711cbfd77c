/// An action or transition in the game tree.
///
/// Edges represent decisions that players can make (bet, fold, etc.) or
/// chance outcomes (card deals). The trait bounds ensure edges can be
/// used as keys in strategy tables and compared against legal action sets.
pub trait CfrEdge:
    Copy + Clone + PartialEq + Eq + Send + Sync + std::hash::Hash + std::fmt::Debug + 'static
{
}
