//! Scheduler parameters loaded from YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shadow_core::{ErrorInfo, ShadowError};

/// YAML-configurable parameters governing the derandomized scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Learning rate of the multiplicative-weight potential.
    #[serde(default = "default_eta")]
    pub eta: f64,
    /// Number of rounds after which an unfinished schedule is abandoned.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
}

fn default_eta() -> f64 {
    0.9
}

fn default_max_rounds() -> usize {
    1_000_000
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            eta: default_eta(),
            max_rounds: default_max_rounds(),
        }
    }
}

impl SchedulerConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load(path: &Path) -> Result<Self, ShadowError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            ShadowError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: Self = serde_yaml::from_str(&raw).map_err(|err| {
            ShadowError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter lies in its admissible range.
    pub fn validate(&self) -> Result<(), ShadowError> {
        if !(self.eta.is_finite() && self.eta > 0.0) {
            return Err(ShadowError::Config(
                ErrorInfo::new("invalid-eta", "eta must be finite and positive")
                    .with_context("eta", self.eta.to_string()),
            ));
        }
        if self.max_rounds == 0 {
            return Err(ShadowError::Config(ErrorInfo::new(
                "invalid-max-rounds",
                "max_rounds must be at least one",
            )));
        }
        Ok(())
    }
}
