use std::time::Duration;

/// Unified trait for solving progress.
///
/// Provides core accessors for epochs, nodes, infos, and elapsed time,
/// with a default implementation for formatted stats.
///
/// # Required Methods
///
/// - `epoch()` — Number of CFR iterations completed
/// - `nodes()` — Total game tree nodes visited
/// - `infos()` — Information sets in the current strategy
/// - `elapsed()` — Wall-clock solving duration
///
/// # Provided Methods
///
/// - `format()` — Tabular stats with N/sec throughput
pub trait Progress {
    fn epoch(&self) -> usize;
    fn nodes(&self) -> usize;
    fn infos(&self) -> usize;
    fn elapsed(&self) -> Duration;
    /// Formats stats as aligned columns with throughput calculation.
    fn format(&self) -> String {
        let rates = self.nodes() as f64 / self.elapsed().as_secs_f64().max(1e-3);
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("epoch {}", self.epoch()),
            format!("nodes {}", self.nodes()),
            format!("infos {}", self.infos()),
            format!("N/sec {:.1}", rates),
        )
    }
}
