//! Runtime configuration read from the environment

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use thiserror::Error;

/// Variable holding the log filter directive
pub const LOG_ENV: &str = "SETCAL_LOG";

/// Variable holding a fixed seed for `select`
pub const SEED_ENV: &str = "SETCAL_SEED";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SETCAL_SEED must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Seed for reproducible `select` results
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(LOG_ENV).ok(), env::var(SEED_ENV).ok())
    }

    fn from_vars(log: Option<String>, seed: Option<String>) -> Result<Self, ConfigError> {
        let seed = match seed.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(
                text.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(text.to_string()))?,
            ),
        };

        Ok(Config {
            log_filter: log
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            seed,
        })
    }

    /// Random source for `select`: seeded when configured, otherwise from OS entropy
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
