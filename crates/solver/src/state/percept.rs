use super::*;

/// An observation emitted alongside a transition.
///
/// Chance outcomes and hidden opponent actions reach a player only
/// through percepts. A percept without a target is public.
pub trait CfrPercept: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    fn target(&self) -> Option<Turn>;
    /// Whether `seat` should fold this percept into its information set.
    fn observed_by(&self, seat: Turn) -> bool {
        self.target().is_none_or(|target| target == seat)
    }
}
