//! Typed moves at the core boundary.
//!
//! The UI hands in raw one-hot vectors; everything past `OneHot` validation
//! talks in `Card` and `Variant`.

mod card;
mod onehot;
mod variant;

pub use card::*;
pub use onehot::*;
pub use variant::*;
