use crate::*;
use cfrd_core::PLAYOUT_MIN;
use cfrd_core::Probability;
use cfrd_core::Utility;

/// Estimates utility by uniformly random playouts.
///
/// Each playout samples chance nodes by their distribution and player
/// nodes uniformly until a terminal state. Playouts are averaged by
/// their sampling probability.
#[derive(Debug, Clone)]
pub struct RandomPlayout {
    playouts: usize,
    sampler: Sampler,
}

impl RandomPlayout {
    /// At least one playout is always run.
    pub fn new(playouts: usize, seed: u64) -> Self {
        Self {
            playouts: playouts.max(PLAYOUT_MIN),
            sampler: Sampler::new(seed),
        }
    }
    pub fn playouts(&self) -> usize {
        self.playouts
    }
    fn playout<G>(&mut self, start: &G) -> CfrResult<(Utility, Probability, usize)>
    where
        G: CfrGame,
    {
        let mut game = start.clone();
        let mut probability = 1.;
        let mut visited = 0;
        while !game.is_terminal() {
            visited += 1;
            let (edge, p) = if game.is_chance() {
                let chances = game.chances();
                let weights = chances.iter().map(|(_, p)| *p).collect::<Vec<_>>();
                let (index, _) = self
                    .sampler
                    .weighted(&weights)
                    .ok_or_else(|| CfrError::IllegalAction(format!("no chances at {:?}", game)))?;
                chances[index]
            } else {
                let choices = game.choices();
                let edge = self
                    .sampler
                    .uniform(&choices)
                    .ok_or_else(|| CfrError::IllegalAction(format!("no choices at {:?}", game)))?;
                (edge, 1. / choices.len() as Probability)
            };
            probability *= p;
            game = game.follow(edge)?;
        }
        Ok((game.payoff(Turn::P1) * probability, probability, visited))
    }
}

impl<G> Estimator<G> for RandomPlayout
where
    G: CfrGame,
{
    fn can_estimate(&self, _: &Tracker<G>) -> bool {
        true
    }
    fn estimate(&mut self, tracker: &Tracker<G>) -> CfrResult<Estimate> {
        let game = tracker.game();
        if game.is_terminal() {
            return Ok(Estimate {
                utility: game.payoff(Turn::P1),
                visited: 1,
            });
        }
        let mut utility = 0.;
        let mut mass = 0.;
        let mut visited = 0;
        for _ in 0..self.playouts {
            let (u, p, n) = self.playout(game)?;
            utility += u;
            mass += p;
            visited += n;
        }
        Ok(Estimate {
            utility: utility / mass,
            visited,
        })
    }
}
