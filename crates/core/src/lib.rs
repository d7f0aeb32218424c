//! Domain models, shared types, and error definitions.
//!
//! Foundation crate -- no I/O dependencies. `Address` and `Person` are plain
//! immutable records: construction assigns fields verbatim and never fails.

pub mod error;
pub mod types;

pub use error::{KinError, KinResult};
pub use types::{Address, Person};
