use std::time::Duration;
use std::time::Instant;

/// Pausable wall-clock accumulator.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    total: Duration,
    since: Option<Instant>,
}

impl Stopwatch {
    pub fn started() -> Self {
        let mut watch = Self::default();
        watch.start();
        watch
    }
    pub fn start(&mut self) {
        if self.since.is_none() {
            self.since = Some(Instant::now());
        }
    }
    pub fn stop(&mut self) {
        if let Some(since) = self.since.take() {
            self.total += since.elapsed();
        }
    }
    pub fn reset(&mut self) {
        self.total = Duration::ZERO;
        self.since = None;
    }
    pub fn is_running(&self) -> bool {
        self.since.is_some()
    }
    /// Time accumulated by completed start/stop spans.
    pub fn elapsed(&self) -> Duration {
        self.total
    }
    /// Accumulated time plus the currently running span.
    pub fn live(&self) -> Duration {
        self.total + self.since.map(|s| s.elapsed()).unwrap_or_default()
    }
}
