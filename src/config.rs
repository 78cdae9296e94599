use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Tunables for one game session. Defaults follow the crate constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rounds remembered per side.
    pub depth: usize,
    /// Minimum top-two probability gap before the argmax is trusted.
    pub threshold: Probability,
    /// Passes over each round's single example.
    pub epochs: usize,
    /// Adam step size.
    pub learning_rate: f64,
    /// Seed for the exploration RNG. Weight initialization is not seeded.
    pub seed: Option<u64>,
    /// Upper bound on one round's training step. Needs a tokio runtime with
    /// the time driver enabled. Ignored on wasm.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: MEMORY_DEPTH,
            threshold: CONFIDENCE_THRESHOLD,
            epochs: TRAINING_EPOCHS,
            learning_rate: LEARNING_RATE,
            seed: None,
            timeout: None,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self> {
        if self.depth == 0 {
            return Err(Error::InvalidConfig("memory depth must be positive".into()));
        }
        if self.epochs == 0 {
            return Err(Error::InvalidConfig("epochs must be positive".into()));
        }
        if !(0. ..=1.).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!(
                "confidence threshold {} outside [0, 1]",
                self.threshold
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.) {
            return Err(Error::InvalidConfig(format!(
                "learning rate {} must be positive",
                self.learning_rate
            )));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::InvalidConfig("timeout must be positive".into()));
        }
        Ok(self)
    }
}
