use cfrd_core::Utility;
use serde::Deserialize;
use serde::Serialize;

/// A player or node type in the game tree.
///
/// CFR distinguishes three node types: player decisions, chance nodes,
/// and terminal nodes. Only two players are supported.
///
/// - `From<usize>` — Player index to turn (0 = P1, 1 = P2, panics otherwise)
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Turn {
    P1,
    P2,
    Chance,
    Terminal,
}

impl Turn {
    pub const PLAYERS: [Turn; 2] = [Turn::P1, Turn::P2];

    /// The other player. Panics on non-player turns.
    pub fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
            other => panic!("{:?} has no opponent", other),
        }
    }
    /// Player index, 0 for P1 and 1 for P2. Panics on non-player turns.
    pub fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
            other => panic!("{:?} is not a player", other),
        }
    }
    pub fn is_player(&self) -> bool {
        matches!(self, Self::P1 | Self::P2)
    }
    /// Converts a P1 utility into this player's utility.
    pub fn sign(&self) -> Utility {
        match self {
            Self::P2 => -1.,
            _ => 1.,
        }
    }
}

impl From<usize> for Turn {
    fn from(player: usize) -> Self {
        match player {
            0 => Self::P1,
            1 => Self::P2,
            _ => panic!("only two players"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_are_opposed() {
        for turn in Turn::PLAYERS {
            assert_eq!(turn.opponent().opponent(), turn);
            assert_eq!(Turn::from(turn.index()), turn);
            assert_eq!(turn.sign(), -turn.opponent().sign());
        }
    }

    #[test]
    #[should_panic]
    fn chance_has_no_index() {
        Turn::Chance.index();
    }
}
