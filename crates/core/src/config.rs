use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Runtime configuration for a continual-resolving player.
///
/// Every field has a default drawn from the constants in this crate,
/// so partial JSON documents and sparse environments both work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initialization time limit in milliseconds.
    pub init_ms: u64,
    /// Per-decision time limit in milliseconds.
    pub act_ms: u64,
    /// Divisor applied to counterfactual values inside the gadget.
    pub cfv_norm: Utility,
    /// Seed of the player's private generator.
    pub seed: u64,
    /// Random playouts per estimate past the next decision point.
    /// `None` traverses all the way to terminal states.
    pub playouts: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            init_ms: RESOLVE_INIT_MS,
            act_ms: RESOLVE_ACT_MS,
            cfv_norm: RESOLVE_CFV_NORM,
            seed: RESOLVE_SEED,
            playouts: None,
        }
    }
}

impl Config {
    /// Parse a JSON document, filling missing fields with defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()
    }
    /// Defaults overridden by `CFRD_INIT`, `CFRD_ACT`, `CFRD_SEED`, `CFRD_PLAYOUTS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }
    /// Same as [`Config::from_env`] but reading from an arbitrary lookup.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(init) = lookup("CFRD_INIT") {
            config.init_ms = Self::millis(&init)?;
        }
        if let Some(act) = lookup("CFRD_ACT") {
            config.act_ms = Self::millis(&act)?;
        }
        if let Some(seed) = lookup("CFRD_SEED") {
            config.seed = seed.trim().parse()?;
        }
        if let Some(playouts) = lookup("CFRD_PLAYOUTS") {
            config.playouts = Some(playouts.trim().parse()?);
        }
        config.validate()
    }
    /// Initialization budget as a duration.
    pub fn init_budget(&self) -> Duration {
        Duration::from_millis(self.init_ms)
    }
    /// Per-decision budget as a duration.
    pub fn act_budget(&self) -> Duration {
        Duration::from_millis(self.act_ms)
    }
    fn millis(s: &str) -> anyhow::Result<u64> {
        parse_duration(s)
            .map(|d| d.as_millis() as u64)
            .ok_or_else(|| anyhow::anyhow!("unparseable duration {:?}", s))
    }
    fn validate(self) -> anyhow::Result<Self> {
        if !(self.cfv_norm.is_finite() && self.cfv_norm > 0.) {
            anyhow::bail!("cfv_norm must be positive, got {}", self.cfv_norm);
        }
        if let Some(n) = self.playouts {
            if n < PLAYOUT_MIN {
                anyhow::bail!("at least {} playout is required, got {}", PLAYOUT_MIN, n);
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_from_constants() {
        let config = Config::default();
        assert_eq!(config.init_budget(), Duration::from_millis(RESOLVE_INIT_MS));
        assert_eq!(config.act_budget(), Duration::from_millis(RESOLVE_ACT_MS));
        assert_eq!(config.playouts, None);
    }

    #[test]
    fn partial_json() {
        let config = Config::from_json(r#"{ "act_ms": 50, "playouts": 4 }"#).unwrap();
        assert_eq!(config.act_ms, 50);
        assert_eq!(config.playouts, Some(4));
        assert_eq!(config.init_ms, RESOLVE_INIT_MS);
    }

    #[test]
    fn invalid_json() {
        assert!(Config::from_json(r#"{ "cfv_norm": 0.0 }"#).is_err());
        assert!(Config::from_json(r#"{ "playouts": 0 }"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn environment_overrides() {
        let vars = HashMap::from([
            ("CFRD_INIT", "2s"),
            ("CFRD_ACT", "250ms"),
            ("CFRD_SEED", "42"),
        ]);
        let config = Config::from_vars(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.init_ms, 2000);
        assert_eq!(config.act_ms, 250);
        assert_eq!(config.seed, 42);
        assert_eq!(config.playouts, None);
    }

    #[test]
    fn environment_garbage() {
        let vars = HashMap::from([("CFRD_ACT", "soon")]);
        assert!(Config::from_vars(|k| vars.get(k).map(|v| v.to_string())).is_err());
    }
}
