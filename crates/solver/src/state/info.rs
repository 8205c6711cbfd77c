use super::*;

/// An information set: the states one player cannot tell apart.
///
/// Identity is purely the owner's percept and own-action stream, so an
/// information set can be evolved without ever seeing the true state:
/// `apply` folds in the owner's own action and `perceive` folds in an
/// observation. Either way the result must equal `game.info(seat)` of
/// the resulting state.
pub trait CfrInfo:
    Clone + PartialEq + Eq + Send + Sync + std::hash::Hash + std::fmt::Debug + 'static
{
    type E: CfrEdge;
    type P: CfrPercept;
    /// The player owning this information set.
    fn seat(&self) -> Turn;
    /// Legal actions for the owner, in the same order as the game's.
    fn choices(&self) -> Vec<Self::E>;
    fn apply(&self, edge: Self::E) -> Self;
    fn perceive(&self, percept: &Self::P) -> Self;
}
