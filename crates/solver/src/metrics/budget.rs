use std::time::Duration;
use std::time::Instant;

/// How long a resolve may run: a wall-clock limit, an iteration limit,
/// or both (whichever is hit first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    time: Option<Duration>,
    iterations: Option<usize>,
}

impl From<Duration> for Budget {
    fn from(time: Duration) -> Self {
        Self::time(time)
    }
}

impl Budget {
    pub fn time(limit: Duration) -> Self {
        Self {
            time: Some(limit),
            iterations: None,
        }
    }
    pub fn iterations(limit: usize) -> Self {
        Self {
            time: None,
            iterations: Some(limit),
        }
    }
    pub fn with_iterations(self, limit: usize) -> Self {
        Self {
            iterations: Some(limit),
            ..self
        }
    }
    pub fn start(&self) -> Timer {
        Timer {
            budget: *self,
            start: Instant::now(),
            current: None,
            longest: Duration::ZERO,
            done: 0,
        }
    }
}

/// A running [`Budget`].
///
/// Iterations are never interrupted: the timer only decides whether
/// another one may begin. A new iteration starts only if the longest
/// one so far still fits in the remaining time, and at least one
/// iteration always runs.
#[derive(Debug, Clone)]
pub struct Timer {
    budget: Budget,
    start: Instant,
    current: Option<Instant>,
    longest: Duration,
    done: usize,
}

impl Timer {
    pub fn can_continue(&self) -> bool {
        if self.done == 0 {
            return true;
        }
        if self.budget.iterations.is_some_and(|n| self.done >= n) {
            return false;
        }
        match self.budget.time {
            Some(limit) => self.start.elapsed() + self.longest <= limit,
            None => self.budget.iterations.is_some(),
        }
    }
    pub fn start_iteration(&mut self) {
        self.current = Some(Instant::now());
    }
    pub fn end_iteration(&mut self) {
        if let Some(began) = self.current.take() {
            self.longest = self.longest.max(began.elapsed());
        }
        self.done += 1;
    }
    pub fn iterations(&self) -> usize {
        self.done
    }
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(budget: Budget) -> usize {
        let mut timer = budget.start();
        while timer.can_continue() {
            timer.start_iteration();
            timer.end_iteration();
        }
        timer.iterations()
    }

    #[test]
    fn iteration_limit() {
        assert_eq!(run(Budget::iterations(17)), 17);
    }

    #[test]
    fn always_one_iteration() {
        assert_eq!(run(Budget::iterations(0)), 1);
        assert_eq!(run(Budget::time(Duration::ZERO)), 1);
        assert_eq!(run(Budget::default()), 1);
    }

    #[test]
    fn time_limit() {
        let mut timer = Budget::time(Duration::from_millis(20)).start();
        while timer.can_continue() {
            timer.start_iteration();
            std::thread::sleep(Duration::from_millis(5));
            timer.end_iteration();
        }
        assert!(timer.iterations() >= 1);
        assert!(timer.elapsed() < Duration::from_millis(120));
    }

    #[test]
    fn whichever_first() {
        let budget = Budget::time(Duration::from_secs(60)).with_iterations(3);
        assert_eq!(run(budget), 3);
    }
}
