//! Core type aliases, constants, and configuration for cfrd.
//!
//! This crate provides the foundational types and tuning parameters
//! shared by the solver and any binary built on top of it.

mod config;

pub use config::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, regrets, counterfactual values, and payoffs.
pub type Utility = f64;
/// Strategy weights, chance distributions, and reach probabilities.
pub type Probability = f64;

// ============================================================================
// REGRET MATCHING
// Convert cumulative regrets to current iteration strategy via normalization.
// ============================================================================
/// Minimum policy weight to prevent division by zero in normalization.
pub const POLICY_MIN: Probability = Probability::MIN_POSITIVE;
/// Floor for cumulative regret storage (prevents unbounded negative growth).
pub const REGRET_MIN: Utility = -4e12;

// ============================================================================
// CONTINUAL RESOLVING
// Budgets are per resolve; a resolve always completes at least one iteration.
// ============================================================================
/// Default wall-clock budget for the initial resolve (milliseconds).
pub const RESOLVE_INIT_MS: u64 = 10_000;
/// Default wall-clock budget for each in-game resolve (milliseconds).
pub const RESOLVE_ACT_MS: u64 = 1_000;
/// Divisor applied to stored counterfactual values inside the gadget.
pub const RESOLVE_CFV_NORM: Utility = 1.;
/// Seed of a player's private generator when none is configured.
pub const RESOLVE_SEED: u64 = 0x5eed;
/// Minimum number of random playouts per estimate.
pub const PLAYOUT_MIN: usize = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "logging")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Parse duration string like "250ms", "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(num) = s.strip_suffix("ms") {
        return num.parse().ok().map(std::time::Duration::from_millis);
    }
    let last = s.char_indices().last().map_or(0, |(i, _)| i);
    let (num, unit) = s.split_at(last);
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration(" 5m "), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("ms"), None);
        assert_eq!(parse_duration("10x"), None);
        assert_eq!(parse_duration("fast"), None);
    }
}
