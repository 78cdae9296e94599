use std::time::Duration;
use thiserror::Error;

/// Failures surfaced to callers of the engine.
///
/// Inputs that arrive while a round is in flight, or before the first
/// prediction exists, are not errors: the orchestrator drops them quietly.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move {values:?}: expected one-hot vector of length {expected}")]
    InvalidMove { values: Vec<f32>, expected: usize },

    #[error("invalid move index {index} for a {variant}-card game")]
    InvalidIndex { index: usize, variant: usize },

    #[error("invalid variant: {0} cards (expected 2 or 3)")]
    InvalidVariant(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("training did not finish within {0:?}")]
    TrainingTimeout(Duration),

    #[error("model error: {0}")]
    Model(#[from] candle_core::Error),
}

/// Convenience alias for results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
