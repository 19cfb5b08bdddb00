//! Transition coordinator.
//!
//! Maps each incoming action onto the next wrapped state: control actions go
//! straight to the history store, domain actions run through the host
//! reducer and then the configured init and filter policy.

mod debug;
mod error;
mod state;
mod undoable;

pub use error::UndoError;
pub use state::UndoableState;
pub use undoable::{Reducer, Undoable};
