use serde::Deserialize;
use serde::Serialize;

/// Deck and betting structure of a poker variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub ranks: u8,
    pub copies: u8,
    pub rounds: u8,
    /// Bet size per round.
    pub bets: [u8; 2],
    pub ante: u8,
}

// ============================================================================
// Reference tables
// ============================================================================
pub const KUHN: Table = Table {
    ranks: 3,
    copies: 1,
    rounds: 1,
    bets: [1, 1],
    ante: 1,
};
pub const LEDUC: Table = Table {
    ranks: 3,
    copies: 2,
    rounds: 2,
    bets: [2, 4],
    ante: 1,
};

impl Table {
    pub fn deck(&self) -> u8 {
        self.ranks * self.copies
    }
    pub fn bet(&self, round: usize) -> u8 {
        self.bets[round.min(self.bets.len() - 1)]
    }
}
