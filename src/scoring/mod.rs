mod keeper;
mod outcome;
mod tally;

pub use keeper::*;
pub use outcome::*;
pub use tally::*;
