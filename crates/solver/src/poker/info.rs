use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A seat's view of a poker hand: its own card, the board, and the
/// public betting.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    seat: Turn,
    hole: Option<u8>,
    board: Option<u8>,
    past: History,
}

impl Info {
    pub fn new(seat: Turn, hole: Option<u8>, board: Option<u8>, past: History) -> Self {
        Self {
            seat,
            hole,
            board,
            past,
        }
    }
    pub fn hole(&self) -> Option<u8> {
        self.hole
    }
    pub fn board(&self) -> Option<u8> {
        self.board
    }
    pub fn history(&self) -> History {
        self.past
    }
    pub fn past(&self) -> Vec<Edge> {
        self.past.iter().collect()
    }
}

impl CfrInfo for Info {
    type E = Edge;
    type P = Percept;
    fn seat(&self) -> Turn {
        self.seat
    }
    fn choices(&self) -> Vec<Self::E> {
        if self.past.status().facing {
            vec![Edge::Fold, Edge::Call]
        } else {
            vec![Edge::Check, Edge::Bet]
        }
    }
    fn apply(&self, edge: Self::E) -> Self {
        Self {
            past: self.past.push(edge),
            ..*self
        }
    }
    fn perceive(&self, percept: &Self::P) -> Self {
        match *percept {
            Percept::Dealt(owner, rank) if owner == self.seat => Self {
                hole: Some(rank),
                ..*self
            },
            Percept::Board(rank) => Self {
                board: Some(rank),
                ..*self
            },
            Percept::Acted(actor, edge) if actor != self.seat => self.apply(edge),
            _ => *self,
        }
    }
}
