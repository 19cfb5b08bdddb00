//! Classification of incoming actions into history commands.

use super::{Action, DEFAULT_INIT_TYPES, JUMP_TO_FUTURE, JUMP_TO_PAST, REDO, UNDO};
use crate::coordinator::UndoError;

/// What the coordinator should do with an incoming action.
///
/// Decided once at the boundary by matching the action's discriminator
/// against the configured [`ActionTypes`].
#[derive(Debug, PartialEq)]
pub enum Command<'a, A> {
    Undo,
    Redo,
    JumpToPast(usize),
    JumpToFuture(usize),
    /// Domain action whose type (re)seeds history.
    Init(&'a A),
    /// Any other domain action.
    Domain(&'a A),
}

/// Configured action discriminators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionTypes {
    pub(crate) undo: String,
    pub(crate) redo: String,
    pub(crate) jump_to_past: String,
    pub(crate) jump_to_future: String,
    pub(crate) init: Vec<String>,
}

impl Default for ActionTypes {
    fn default() -> Self {
        Self {
            undo: UNDO.to_string(),
            redo: REDO.to_string(),
            jump_to_past: JUMP_TO_PAST.to_string(),
            jump_to_future: JUMP_TO_FUTURE.to_string(),
            init: DEFAULT_INIT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ActionTypes {
    pub fn undo(&self) -> &str {
        &self.undo
    }

    pub fn redo(&self) -> &str {
        &self.redo
    }

    pub fn jump_to_past(&self) -> &str {
        &self.jump_to_past
    }

    pub fn jump_to_future(&self) -> &str {
        &self.jump_to_future
    }

    pub fn init(&self) -> &[String] {
        &self.init
    }

    /// Control discriminators paired with their role name.
    pub(crate) fn controls(&self) -> [(&'static str, &str); 4] {
        [
            ("undo", self.undo.as_str()),
            ("redo", self.redo.as_str()),
            ("jump_to_past", self.jump_to_past.as_str()),
            ("jump_to_future", self.jump_to_future.as_str()),
        ]
    }

    pub fn is_init(&self, action_type: &str) -> bool {
        self.init.iter().any(|t| t == action_type)
    }

    /// Route an action to a command.
    ///
    /// Jump actions without an index are rejected with
    /// [`UndoError::MissingIndex`].
    pub fn classify<'a, A: Action>(&self, action: &'a A) -> Result<Command<'a, A>, UndoError> {
        let action_type = action.action_type();
        let jump_index = || {
            action.index().ok_or_else(|| UndoError::MissingIndex {
                action_type: action_type.to_string(),
            })
        };

        if action_type == self.undo {
            Ok(Command::Undo)
        } else if action_type == self.redo {
            Ok(Command::Redo)
        } else if action_type == self.jump_to_past {
            Ok(Command::JumpToPast(jump_index()?))
        } else if action_type == self.jump_to_future {
            Ok(Command::JumpToFuture(jump_index()?))
        } else if self.is_init(action_type) {
            Ok(Command::Init(action))
        } else {
            Ok(Command::Domain(action))
        }
    }
}
