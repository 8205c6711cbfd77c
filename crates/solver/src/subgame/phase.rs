/// Phase of execution within the gadget.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Phase<G> {
    /// Chance is about to select a candidate state.
    Root,
    /// Opponent decides whether to enter candidate `i`.
    Choice(usize),
    /// Opponent took the alternative value of candidate `i`.
    Quit(usize),
    /// Normal gameplay within the real subgame.
    Real(G),
}
