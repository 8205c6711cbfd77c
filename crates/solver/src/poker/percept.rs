use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// What one transition reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Percept {
    /// A private card, seen only by its owner.
    Dealt(Turn, u8),
    /// The public board card.
    Board(u8),
    /// An action, seen by the actor's opponent.
    Acted(Turn, Edge),
}

impl CfrPercept for Percept {
    fn target(&self) -> Option<Turn> {
        match self {
            Self::Dealt(owner, _) => Some(*owner),
            Self::Board(_) => None,
            Self::Acted(actor, _) => Some(actor.opponent()),
        }
    }
}
