pub mod duration;
pub mod error;

pub use error::{DurationError, Result, StoreError, TelemetryError};
