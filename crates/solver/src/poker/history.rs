use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Public betting history, two bits per action.
///
/// Deals are never recorded here; they live in the holes and board.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    bits: u32,
    len: u8,
}

/// Where the betting stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Betting rounds already closed.
    pub closed: u8,
    /// Actions taken in the current round.
    pub acted: u8,
    /// The player to act faces a bet.
    pub facing: bool,
}

impl History {
    const WIDTH: u32 = 2;
    const LIMIT: u8 = (u32::BITS / Self::WIDTH) as u8;

    pub fn push(&self, edge: Edge) -> Self {
        assert!(self.len < Self::LIMIT, "betting history is full");
        let code = match edge {
            Edge::Check => 0,
            Edge::Bet => 1,
            Edge::Fold => 2,
            Edge::Call => 3,
            Edge::Draw(_) => panic!("deals are not betting actions"),
        };
        Self {
            bits: self.bits | code << (Self::WIDTH * self.len as u32),
            len: self.len + 1,
        }
    }
    pub fn len(&self) -> usize {
        self.len as usize
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn get(&self, index: usize) -> Option<Edge> {
        (index < self.len()).then(|| match (self.bits >> (Self::WIDTH * index as u32)) & 0b11 {
            0 => Edge::Check,
            1 => Edge::Bet,
            2 => Edge::Fold,
            _ => Edge::Call,
        })
    }
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
    pub fn last(&self) -> Option<Edge> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn status(&self) -> Status {
        let mut status = Status {
            closed: 0,
            acted: 0,
            facing: false,
        };
        for edge in self.iter() {
            status.acted += 1;
            match edge {
                Edge::Check if status.acted == 2 => {
                    status.closed += 1;
                    status.acted = 0;
                }
                Edge::Bet => status.facing = true,
                Edge::Call => {
                    status.closed += 1;
                    status.acted = 0;
                    status.facing = false;
                }
                _ => {}
            }
        }
        status
    }
    /// Chips each player has put in, antes included.
    pub fn contributions(&self, table: &Table) -> [u8; 2] {
        let mut chips = [table.ante; 2];
        let mut round = 0;
        let mut acted = 0;
        for edge in self.iter() {
            let who = acted % 2;
            acted += 1;
            match edge {
                Edge::Bet => chips[who] += table.bet(round),
                Edge::Call => {
                    chips[who] += table.bet(round);
                    round += 1;
                    acted = 0;
                }
                Edge::Check if acted == 2 => {
                    round += 1;
                    acted = 0;
                }
                _ => {}
            }
        }
        chips
    }
    /// The player who folded, if anyone did.
    pub fn folder(&self) -> Option<Turn> {
        let mut acted = 0;
        for edge in self.iter() {
            match edge {
                Edge::Fold => return Some(Turn::from(acted % 2)),
                Edge::Call => acted = 0,
                Edge::Check if acted == 1 => acted = 0,
                _ => acted += 1,
            }
        }
        None
    }
}
