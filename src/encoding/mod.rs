//! Turns the two memory windows into the model's input sequence.

mod sequence;

pub use sequence::*;
