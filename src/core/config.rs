/*!
 * Simulation Configuration
 * Runtime settings loaded from environment variables
 */

use super::errors::{SimError, SimResult};
use super::limits::{
    DEFAULT_QUANTUM, DEFAULT_WORKER_THREADS, ENV_DEFAULT_QUANTUM, ENV_TRACE_JSON, ENV_WORKERS,
};
use serde::{Deserialize, Serialize};

/// Runtime configuration
///
/// Environment variables:
/// - SIM_DEFAULT_QUANTUM: round-robin quantum used by the binary (default: 3)
/// - SIM_WORKERS: engine pool worker threads (default: 4)
/// - SIM_TRACE_JSON: enable JSON log output (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    pub default_quantum: u64,
    pub worker_threads: usize,
    pub trace_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            default_quantum: DEFAULT_QUANTUM,
            worker_threads: DEFAULT_WORKER_THREADS,
            trace_json: false,
        }
    }
}

impl SimConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unset keys keep their defaults; set but malformed keys are rejected.
    pub fn from_lookup<F>(lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_QUANTUM) {
            config.default_quantum = parse_positive(ENV_DEFAULT_QUANTUM, &raw)?;
        }

        if let Some(raw) = lookup(ENV_WORKERS) {
            config.worker_threads = parse_positive(ENV_WORKERS, &raw)? as usize;
        }

        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            config.trace_json = raw == "1" || raw.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, raw: &str) -> SimResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(SimError::invalid(format!("{} must be > 0", key))),
        Ok(value) => Ok(value),
        Err(e) => Err(SimError::invalid(format!(
            "{} has invalid value '{}': {}",
            key, raw, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SimConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.default_quantum, 3);
    }

    #[test]
    fn test_overrides() {
        let config = SimConfig::from_lookup(lookup_from(&[
            ("SIM_DEFAULT_QUANTUM", "5"),
            ("SIM_WORKERS", "2"),
            ("SIM_TRACE_JSON", "true"),
        ]))
        .unwrap();
        assert_eq!(config.default_quantum, 5);
        assert_eq!(config.worker_threads, 2);
        assert!(config.trace_json);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        assert!(SimConfig::from_lookup(lookup_from(&[("SIM_DEFAULT_QUANTUM", "0")])).is_err());
        assert!(SimConfig::from_lookup(lookup_from(&[("SIM_WORKERS", "many")])).is_err());
    }
}
