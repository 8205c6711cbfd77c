use super::*;
use crate::*;
use cfrd_core::Probability;
use cfrd_core::Utility;

/// Immutable cursor over a walk through a game tree.
///
/// Carries the current state, both players' reach probabilities, the
/// chance reach, and the landmarks continual re-solving needs: the
/// resolving player's first information set and top action inside the
/// subgame, and whether its next decision point has been reached.
///
/// [`Tracker::next`] returns a fresh tracker, so one tracker can be
/// shared by every branch of a recursive pass.
///
/// # Landmarks
///
/// A tracker created with [`Tracker::init`] is already armed: the
/// first decision of `hero` is its next decision point. A tracker
/// created with [`Tracker::act`] arms itself after `hero` acts once,
/// recording that decision as the top action.
#[derive(Debug, Clone)]
pub struct Tracker<G>
where
    G: CfrGame,
{
    game: G,
    hero: Turn,
    reach: [Probability; 2],
    chance: Probability,
    armed: bool,
    first: Option<(G::I, usize)>,
    cursor: Cursor,
}

impl<G> Tracker<G>
where
    G: CfrGame,
{
    /// Tracker for an initial resolve from a fresh game.
    pub fn init(hero: Turn, game: G) -> Self {
        Self::new(hero, game, 1., true)
    }
    /// Tracker for an in-game resolve whose root chance reach is `chance`.
    pub fn act(hero: Turn, game: G, chance: Probability) -> Self {
        Self::new(hero, game, chance, false)
    }
    fn new(hero: Turn, game: G, chance: Probability, armed: bool) -> Self {
        let cursor = if armed && game.turn() == hero {
            Cursor::Here
        } else {
            Cursor::Pending
        };
        Self {
            game,
            hero,
            reach: [1., 1.],
            chance,
            armed,
            first: None,
            cursor,
        }
    }

    /// Advance along `edge`, taken with probability `probability`.
    ///
    /// At chance nodes the probability scales the chance reach; at
    /// decision nodes it scales the acting player's reach.
    pub fn next(&self, edge: G::E, probability: Probability) -> CfrResult<Self> {
        let turn = self.game.turn();
        let choices = self.game.choices();
        let index = choices
            .iter()
            .position(|e| e == &edge)
            .ok_or_else(|| CfrError::IllegalAction(format!("{:?} at {:?}", edge, self.game)))?;
        let mut reach = self.reach;
        let mut chance = self.chance;
        match turn {
            Turn::Chance => chance *= probability,
            Turn::P1 | Turn::P2 => reach[turn.index()] *= probability,
            Turn::Terminal => unreachable!("terminal states have no choices"),
        }
        let mut armed = self.armed;
        let mut first = self.first.clone();
        let mut cursor = self.cursor;
        match cursor {
            Cursor::Here | Cursor::Past => cursor = Cursor::Past,
            Cursor::Pending if turn == self.hero && !armed => {
                first = Some((self.game.info(self.hero), index));
                armed = true;
            }
            Cursor::Pending => {}
        }
        let game = self.game.apply(edge);
        if cursor == Cursor::Pending && armed && game.turn() == self.hero {
            cursor = Cursor::Here;
        }
        Ok(Self {
            game,
            hero: self.hero,
            reach,
            chance,
            armed,
            first,
            cursor,
        })
    }

    pub fn game(&self) -> &G {
        &self.game
    }
    pub fn hero(&self) -> Turn {
        self.hero
    }
    pub fn reach(&self, turn: Turn) -> Probability {
        self.reach[turn.index()]
    }
    pub fn chance(&self) -> Probability {
        self.chance
    }
    /// Reach of everyone except `turn`, chance included.
    pub fn counterfactual(&self, turn: Turn) -> Probability {
        self.chance * self.reach(turn.opponent())
    }
    /// The resolving player's first information set and top action.
    pub fn first(&self) -> Option<&(G::I, usize)> {
        self.first.as_ref()
    }
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
    /// This state is the resolving player's next decision point.
    pub fn is_next_turn(&self) -> bool {
        self.cursor == Cursor::Here
    }
    /// The next decision point is this state or lies behind it.
    pub fn was_next_turn_reached(&self) -> bool {
        self.cursor != Cursor::Pending
    }
    pub fn payoff(&self, turn: Turn) -> Utility {
        self.game.payoff(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kuhn() -> Poker {
        Poker::new(KUHN)
    }

    #[test]
    fn init_marks_first_decision() {
        let root = Tracker::init(Turn::P2, kuhn());
        let dealt = root
            .next(Edge::Draw(0), 1. / 3.)
            .and_then(|t| t.next(Edge::Draw(1), 1. / 2.))
            .unwrap();
        assert!(!dealt.was_next_turn_reached());
        assert!((dealt.chance() - 1. / 6.).abs() < 1e-12);
        let bet = dealt.next(Edge::Bet, 0.25).unwrap();
        assert!(bet.is_next_turn());
        assert!(bet.first().is_none());
        assert_eq!(bet.reach(Turn::P1), 0.25);
        assert_eq!(bet.reach(Turn::P2), 1.);
        let call = bet.next(Edge::Call, 0.5).unwrap();
        assert_eq!(call.cursor(), Cursor::Past);
        assert_eq!(call.reach(Turn::P2), 0.5);
    }

    #[test]
    fn act_arms_after_top_action() {
        let game = kuhn().apply(Edge::Draw(0)).apply(Edge::Draw(2));
        let root = Tracker::act(Turn::P1, game, 0.5);
        assert_eq!(root.cursor(), Cursor::Pending);
        let check = root.next(Edge::Check, 0.7).unwrap();
        assert_eq!(check.first().map(|(_, k)| *k), Some(0));
        assert_eq!(check.cursor(), Cursor::Pending);
        let bet = check.next(Edge::Bet, 0.9).unwrap();
        assert!(bet.is_next_turn());
        assert!((bet.counterfactual(Turn::P1) - 0.45).abs() < 1e-12);
    }

    #[test]
    fn rejects_illegal_edges() {
        let root = Tracker::init(Turn::P1, kuhn());
        assert!(matches!(
            root.next(Edge::Bet, 1.),
            Err(CfrError::IllegalAction(_))
        ));
    }
}
