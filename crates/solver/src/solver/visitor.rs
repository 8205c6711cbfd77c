use crate::*;
use cfrd_core::Utility;

/// Observer of a CFR traversal.
///
/// `enter` fires before a state is expanded, `leave` after its player-1
/// utility is known. Neither may influence the traversal.
pub trait Visitor<G>
where
    G: CfrGame,
{
    fn enter(&mut self, tracker: &Tracker<G>, average: &Strategy<G::I>) {
        let _ = (tracker, average);
    }
    fn leave(&mut self, tracker: &Tracker<G>, utility: Utility) {
        let _ = (tracker, utility);
    }
}

impl<G> Visitor<G> for () where G: CfrGame {}
