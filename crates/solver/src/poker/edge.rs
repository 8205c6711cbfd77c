use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Poker actions and deals.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edge {
    /// Chance deals a card of this rank.
    Draw(u8),
    Check,
    Bet,
    Fold,
    Call,
}

impl CfrEdge for Edge {}
