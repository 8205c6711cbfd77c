use crate::*;
use std::time::Duration;

/// A seat at the table, driven by a match loop.
///
/// The loop calls `init` once before the hand, then `act` whenever the
/// seat is to move, and delivers every percept the seat may observe.
/// `force_action` plays a given action as if the player had chosen it,
/// which keeps a re-solving player's bookkeeping in step.
pub trait Player<G>: Send
where
    G: CfrGame,
{
    fn seat(&self) -> Turn;
    fn init(&mut self, budget: Duration) -> CfrResult<()>;
    fn act(&mut self, budget: Duration) -> CfrResult<G::E>;
    fn force_action(&mut self, edge: G::E, budget: Duration) -> CfrResult<()>;
    fn receive_percept(&mut self, percept: &G::P);
}

/// Rejects an action outside the information set's choices.
pub(crate) fn legal<I>(info: &I, edge: &I::E) -> CfrResult<()>
where
    I: CfrInfo,
{
    match info.choices().contains(edge) {
        true => Ok(()),
        false => Err(CfrError::IllegalAction(format!("{:?} at {:?}", edge, info))),
    }
}
