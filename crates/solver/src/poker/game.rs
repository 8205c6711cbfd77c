use super::*;
use crate::*;
use cfrd_core::Probability;
use cfrd_core::Utility;
use std::cmp::Ordering;

/// A hand of one-bet-per-round poker over a [`Table`].
///
/// Chance deals P1's card, then P2's, then (between rounds) the board.
/// Every round opens with P1, allows at most one bet, and closes on
/// check-check or a call. At showdown a pair with the board beats any
/// high card; otherwise the higher rank wins the pot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Poker {
    table: Table,
    holes: [Option<u8>; 2],
    board: Option<u8>,
    past: History,
}

impl Poker {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            holes: [None; 2],
            board: None,
            past: History::default(),
        }
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn hole(&self, seat: Turn) -> Option<u8> {
        self.holes[seat.index()]
    }
    pub fn board(&self) -> Option<u8> {
        self.board
    }
    pub fn past(&self) -> History {
        self.past
    }
    fn cards(&self) -> impl Iterator<Item = u8> + '_ {
        self.holes.iter().chain(std::iter::once(&self.board)).flatten().copied()
    }
    fn remaining(&self, rank: u8) -> u8 {
        self.table.copies - self.cards().filter(|c| *c == rank).count() as u8
    }
    /// Pair with the board first, then rank.
    fn strength(&self, seat: Turn) -> (bool, Option<u8>) {
        let hole = self.hole(seat);
        (hole.is_some() && hole == self.board, hole)
    }
}

impl CfrGame for Poker {
    type E = Edge;
    type P = Percept;
    type I = Info;
    fn turn(&self) -> Turn {
        if self.holes.iter().any(Option::is_none) {
            return Turn::Chance;
        }
        if self.past.last() == Some(Edge::Fold) {
            return Turn::Terminal;
        }
        let status = self.past.status();
        match status.closed {
            n if n >= self.table.rounds => Turn::Terminal,
            n if n > 0 && self.board.is_none() => Turn::Chance,
            _ => Turn::from(status.acted as usize % 2),
        }
    }
    fn choices(&self) -> Vec<Self::E> {
        match self.turn() {
            Turn::Terminal => vec![],
            Turn::Chance => self.chances().into_iter().map(|(e, _)| e).collect(),
            _ if self.past.status().facing => vec![Edge::Fold, Edge::Call],
            _ => vec![Edge::Check, Edge::Bet],
        }
    }
    fn apply(&self, edge: Self::E) -> Self {
        match edge {
            Edge::Draw(rank) => match self.holes {
                [None, _] => Self {
                    holes: [Some(rank), None],
                    ..*self
                },
                [first, None] => Self {
                    holes: [first, Some(rank)],
                    ..*self
                },
                _ => Self {
                    board: Some(rank),
                    ..*self
                },
            },
            edge => Self {
                past: self.past.push(edge),
                ..*self
            },
        }
    }
    fn payoff(&self, turn: Turn) -> Utility {
        let chips = self.past.contributions(&self.table);
        let opponent = turn.opponent();
        let won = chips[opponent.index()] as Utility;
        let lost = chips[turn.index()] as Utility;
        if let Some(folder) = self.past.folder() {
            return if folder == turn { -lost } else { won };
        }
        match self.strength(turn).cmp(&self.strength(opponent)) {
            Ordering::Greater => won,
            Ordering::Less => -lost,
            Ordering::Equal => 0.,
        }
    }
    fn chances(&self) -> Policy<Self::E> {
        let total = (self.table.deck() as usize - self.cards().count()) as Probability;
        (0..self.table.ranks)
            .map(|rank| (rank, self.remaining(rank)))
            .filter(|(_, left)| *left > 0)
            .map(|(rank, left)| (Edge::Draw(rank), left as Probability / total))
            .collect()
    }
    fn percepts(&self, edge: Self::E) -> Vec<Self::P> {
        match (edge, self.holes) {
            (Edge::Draw(rank), [None, _]) => vec![Percept::Dealt(Turn::P1, rank)],
            (Edge::Draw(rank), [_, None]) => vec![Percept::Dealt(Turn::P2, rank)],
            (Edge::Draw(rank), _) => vec![Percept::Board(rank)],
            (edge, _) => vec![Percept::Acted(self.turn(), edge)],
        }
    }
    fn info(&self, turn: Turn) -> Self::I {
        Info::new(turn, self.hole(turn), self.board, self.past)
    }
}
