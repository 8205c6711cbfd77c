/// Position of a walk relative to the resolving player's next decision.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cursor {
    /// The next decision point has not been reached yet.
    Pending,
    /// This state is the next decision point.
    Here,
    /// The walk has moved beyond the next decision point.
    Past,
}
