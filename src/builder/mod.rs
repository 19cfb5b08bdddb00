//! Builder API for configuring the undo coordinator.
//!
//! Configuration is validated once at build time. All problems are reported
//! together rather than one at a time.

pub mod config;
pub mod error;
mod rules;

pub use config::{UndoableBuilder, UndoableConfig};
pub use error::{BuildError, ConfigViolation};
