//! The wrapped state handed to and returned by the coordinator.

use crate::core::History;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

/// Externally visible state: the history's three fields plus a `history`
/// alias carrying the same triple.
///
/// Serialized form:
///
/// ```json
/// { "past": [..], "present": .., "future": [..],
///   "history": { "past": [..], "present": .., "future": [..] } }
/// ```
///
/// Deserialization reads `past`, `present` and `future` and ignores the alias.
#[derive(Debug, Deserialize)]
#[serde(from = "History<S>", bound(deserialize = "S: Deserialize<'de>"))]
pub struct UndoableState<S> {
    history: History<S>,
}

impl<S> UndoableState<S> {
    pub fn new(history: History<S>) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn into_history(self) -> History<S> {
        self.history
    }

    pub fn past(&self) -> &[Arc<S>] {
        self.history.past()
    }

    pub fn present(&self) -> Option<&S> {
        self.history.present()
    }

    pub fn future(&self) -> &[Arc<S>] {
        self.history.future()
    }
}

impl<S> From<History<S>> for UndoableState<S> {
    fn from(history: History<S>) -> Self {
        Self::new(history)
    }
}

impl<S> Clone for UndoableState<S> {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
        }
    }
}

impl<S: PartialEq> PartialEq for UndoableState<S> {
    fn eq(&self, other: &Self) -> bool {
        self.history == other.history
    }
}

impl<S: Serialize> Serialize for UndoableState<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut state = serializer.serialize_struct("UndoableState", 4)?;
        state.serialize_field("past", self.history.past())?;
        state.serialize_field("present", &self.history.present())?;
        state.serialize_field("future", self.history.future())?;
        state.serialize_field("history", &self.history)?;
        state.end()
    }
}
