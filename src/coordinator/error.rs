//! Coordinator errors.

use crate::core::HistoryError;
use thiserror::Error;

/// Errors that can occur while reducing an action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UndoError {
    #[error("Jump action '{action_type}' is missing a target index")]
    MissingIndex { action_type: String },

    #[error(transparent)]
    History(#[from] HistoryError),
}
