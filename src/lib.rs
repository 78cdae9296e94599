//! An adaptive opponent for a card-guessing game.
//!
//! Every round the player picks one of K cards. Pyotr commits to a guess
//! before the pick is revealed, scores the round, and then fits a small
//! recurrent model to the pick it just saw so it can guess better next time.

pub mod config;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod game;
pub mod memory;
pub mod moves;
pub mod scoring;
pub mod training;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::Config;
pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Model outputs, one-hot entries, and exploration thresholds.
pub type Probability = f32;
/// Signed running score. Positive favors the player.
pub type Score = i64;

// ============================================================================
// MEMORY
// ============================================================================
/// Past rounds remembered per side (player picks and Pyotr's own guesses).
pub const MEMORY_DEPTH: usize = 10;

// ============================================================================
// PREDICTION
// Below this gap between the two most likely cards, the argmax is not
// trusted and Pyotr guesses uniformly at random instead.
// ============================================================================
/// Minimum gap between the top two probabilities to trust the argmax.
pub const CONFIDENCE_THRESHOLD: Probability = 0.05;

// ============================================================================
// ONLINE TRAINING
// One example per round, fit in isolation. Adam hyperparameters are the
// usual defaults.
// ============================================================================
/// Full passes over the single example collected each round.
pub const TRAINING_EPOCHS: usize = 30;
/// Adam step size.
pub const LEARNING_RATE: f64 = 1e-3;
/// Adam first moment decay.
pub const ADAM_BETA1: f64 = 0.9;
/// Adam second moment decay.
pub const ADAM_BETA2: f64 = 0.999;
/// Adam denominator smoothing.
pub const ADAM_EPSILON: f64 = 1e-7;

// ============================================================================
// NETWORK SHAPE
// Widths scale with K: recurrent width 2·D·K, then dense 20K, 20K, 10K, K.
// ============================================================================
/// Recurrent hidden width per (depth × variant) unit.
pub const RECURRENT_FACTOR: usize = 2;
/// Widths of the three hidden dense layers per variant unit.
pub const DENSE_FACTORS: [usize; 3] = [20, 20, 10];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// The terminal only shows warnings so it does not fight the interactive prompt.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
