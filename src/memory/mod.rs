mod side;
mod snapshot;
mod store;
mod window;

pub use side::*;
pub use snapshot::*;
pub use store::*;
pub use window::*;
