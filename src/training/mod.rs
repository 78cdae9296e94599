//! Per-round online fitting of the prediction network.

mod trainer;

pub use trainer::*;
