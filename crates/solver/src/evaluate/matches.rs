use super::*;
use crate::*;
use cfrd_core::Config;
use cfrd_core::Utility;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::Mutex;

/// Plays one hand from `root` to a terminal state.
///
/// `players` are indexed by seat. Chance is dealt by `dealer`, and every
/// percept is relayed to both players, who keep only what they observe.
/// Initialization and decisions get the configured time limits.
pub fn play_hand<G>(
    root: &G,
    players: &mut [Box<dyn Player<G>>; 2],
    dealer: &mut Sampler,
    config: &Config,
) -> CfrResult<G>
where
    G: CfrGame,
{
    for player in players.iter_mut() {
        player.init(config.init_budget())?;
    }
    let mut game = root.clone();
    while !game.is_terminal() {
        let edge = match game.turn() {
            Turn::Chance => {
                let chances = game.chances();
                let weights = chances.iter().map(|(_, p)| *p).collect::<Vec<_>>();
                let (index, _) = dealer
                    .weighted(&weights)
                    .ok_or_else(|| CfrError::IllegalAction(format!("no deal at {:?}", game)))?;
                chances[index].0
            }
            turn => players[turn.index()].act(config.act_budget())?,
        };
        let percepts = game.percepts(edge);
        game = game.follow(edge)?;
        for percept in percepts {
            for player in players.iter_mut() {
                player.receive_percept(&percept);
            }
        }
    }
    Ok(game)
}

/// Result of [`Evaluator::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub hands: usize,
    /// In-game resolves merged into the aggregate.
    pub resolves: usize,
    /// Mean payoff of the resolving player per hand.
    pub payoff: Utility,
    /// Information sets the aggregate defines.
    pub defined: usize,
    /// Exploitability of the aggregate, undefined sets played uniformly.
    pub exploitability: Utility,
}

/// Judges a continual-resolving player by playing it against a random
/// opponent and measuring the strategies it used along the way.
///
/// Seats alternate every hand, starting with P1. Hand `i` seeds the
/// resolving player, the opponent, and the dealer with `config.seed + i`.
pub struct Evaluator<G, R = SummedRegret, W = ConstantWeight>
where
    G: CfrGame,
    R: RegretSchedule,
    W: PolicySchedule,
{
    root: G,
    config: Config,
    hands: usize,
    iterations: Option<usize>,
    phantom: PhantomData<(R, W)>,
}

impl<G, R, W> Evaluator<G, R, W>
where
    G: CfrGame,
    R: RegretSchedule + 'static,
    W: PolicySchedule + 'static,
{
    pub fn new(root: G, config: Config, hands: usize) -> Self {
        Self {
            root,
            config,
            hands,
            iterations: None,
            phantom: PhantomData,
        }
    }
    /// Caps every resolve at `iterations` on top of the time limits.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn evaluate(&self) -> CfrResult<Evaluation> {
        let aggregator = Arc::new(Mutex::new(StrategyAggregator::<G>::default()));
        let mut total = 0.;
        for hand in 0..self.hands {
            let seat = if hand % 2 == 0 { Turn::P1 } else { Turn::P2 };
            let seed = self.config.seed.wrapping_add(hand as u64);
            let config = Config { seed, ..self.config };
            let mut resolving = ResolvingPlayer::<G, R, W>::new(self.root.clone(), seat, config)
                .with_listener(Box::new(aggregator.clone()));
            if let Some(n) = self.iterations {
                resolving = resolving.with_iterations(n);
            }
            let random = RandomPlayer::new(&self.root, seat.opponent(), seed);
            let mut players: [Box<dyn Player<G>>; 2] = match seat {
                Turn::P1 => [Box::new(resolving), Box::new(random)],
                _ => [Box::new(random), Box::new(resolving)],
            };
            let end = play_hand(&self.root, &mut players, &mut Sampler::new(seed), &config)?;
            total += end.payoff(seat);
            log::debug!("[{:>4}] {:?} {:+.1}", hand + 1, seat, end.payoff(seat));
        }
        let aggregator = aggregator.lock().unwrap_or_else(|e| e.into_inner());
        let strategy = aggregator.strategy();
        let evaluation = Evaluation {
            hands: self.hands,
            resolves: aggregator.resolves(),
            payoff: total / self.hands.max(1) as Utility,
            defined: strategy.len(),
            exploitability: exploitability(&self.root, strategy)?,
        };
        log::info!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("hands {}", evaluation.hands),
            format!("resolves {}", evaluation.resolves),
            format!("infos {}", evaluation.defined),
            format!("exp {:.4}", evaluation.exploitability),
        );
        Ok(evaluation)
    }
}
