//! History store errors.

use std::fmt;
use thiserror::Error;

/// Which side of the present a jump targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Past => f.write_str("past"),
            Self::Future => f.write_str("future"),
        }
    }
}

/// Errors produced by history transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Jump index {index} is out of range for {direction} of length {len}")]
    InvalidIndex {
        direction: Direction,
        index: usize,
        len: usize,
    },
}
