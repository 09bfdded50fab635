use serde::{Deserialize, Serialize};
use tracing::warn;

/// Engine tuning knobs, read from the environment at start-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub creativity_level: f64,
    pub innovation_threshold: f64,
    pub feasibility_factor: f64,
    /// Seed for the generator's random source; entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            creativity_level: 0.8,
            innovation_threshold: 0.7,
            feasibility_factor: 0.6,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Build from `IDEATION_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            creativity_level: parse_or(
                &lookup,
                "IDEATION_CREATIVITY_LEVEL",
                defaults.creativity_level,
            ),
            innovation_threshold: parse_or(
                &lookup,
                "IDEATION_INNOVATION_THRESHOLD",
                defaults.innovation_threshold,
            ),
            feasibility_factor: parse_or(
                &lookup,
                "IDEATION_FEASIBILITY_FACTOR",
                defaults.feasibility_factor,
            ),
            seed: lookup("IDEATION_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!("Ignoring IDEATION_SEED={:?}: {}", raw, e);
                    None
                }
            }),
        }
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring {}={:?}: {}, using {}", key, raw, e, default);
                default
            }
        },
        None => default,
    }
}
