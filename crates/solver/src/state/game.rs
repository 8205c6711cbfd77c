use crate::*;
use cfrd_core::Utility;

/// A node in the complete-information game tree.
///
/// Implements the core game logic: state transitions via actions and
/// payoff computation at terminal nodes. Every transition produces a
/// new state; equality and hashing must reflect only game-relevant
/// content.
///
/// # Required Methods
///
/// - `turn()` — Returns whose turn it is (player/chance/terminal)
/// - `choices()` — Legal actions in declared order
/// - `apply(edge)` — Returns new state after taking a legal action
/// - `payoff(turn)` — Returns utility for a player at terminal nodes
/// - `chances()` — Distribution over actions at chance nodes
/// - `percepts(edge)` — Observations emitted by a transition
/// - `info(turn)` — Information set of a player at this state
///
/// # Design Notes
///
/// `apply` may panic on an illegal edge. Callers that cannot vouch for
/// legality go through [`CfrGame::follow`] instead.
pub trait CfrGame: Clone + PartialEq + Eq + Send + Sync + std::hash::Hash + std::fmt::Debug + 'static {
    type E: CfrEdge;
    type P: CfrPercept;
    type I: CfrInfo<E = Self::E, P = Self::P>;
    fn turn(&self) -> Turn;
    fn choices(&self) -> Vec<Self::E>;
    fn apply(&self, edge: Self::E) -> Self;
    fn payoff(&self, turn: Turn) -> Utility;
    fn chances(&self) -> Policy<Self::E>;
    fn percepts(&self, edge: Self::E) -> Vec<Self::P>;
    fn info(&self, turn: Turn) -> Self::I;

    fn is_terminal(&self) -> bool {
        self.turn() == Turn::Terminal
    }
    fn is_chance(&self) -> bool {
        self.turn() == Turn::Chance
    }
    fn is_legal(&self, edge: &Self::E) -> bool {
        self.choices().contains(edge)
    }
    /// Checked transition.
    fn follow(&self, edge: Self::E) -> CfrResult<Self> {
        if self.is_legal(&edge) {
            Ok(self.apply(edge))
        } else {
            Err(CfrError::IllegalAction(format!("{:?} at {:?}", edge, self)))
        }
    }
    /// Information set of whoever acts here.
    fn acting_info(&self) -> Self::I {
        self.info(self.turn())
    }
}
