mod network;
mod prediction;
mod predictor;

pub use network::*;
pub use prediction::*;
pub use predictor::*;
