//! Utility modules for Pulseboard

pub mod error;

pub use error::{PulseboardError, Result};
