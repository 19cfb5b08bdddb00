//! Core history types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - The persistent `History` store and its transitions
//! - Filter predicates deciding what gets recorded
//! - Store errors
//!
//! All logic in this module is pure (no side effects). States are never
//! inspected, so the store is generic over any state type.

mod error;
mod filter;
mod history;

pub use error::{Direction, HistoryError};
#[allow(deprecated)]
pub use filter::if_action;
pub use filter::{distinct_state, exclude_action, include_action, Filter};
pub use history::History;
