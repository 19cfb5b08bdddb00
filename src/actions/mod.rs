//! Action shape, default discriminators and action creators.
//!
//! Every action the coordinator sees carries a string discriminator and, for
//! jumps, a target index. Host applications either implement [`Action`] for
//! their own action type or use [`BasicAction`] directly.

mod command;

pub use command::{ActionTypes, Command};

use serde::{Deserialize, Serialize};

/// Default discriminator for undo actions.
pub const UNDO: &str = "@@undoable/UNDO";
/// Default discriminator for redo actions.
pub const REDO: &str = "@@undoable/REDO";
/// Default discriminator for jump-to-past actions.
pub const JUMP_TO_PAST: &str = "@@undoable/JUMP_TO_PAST";
/// Default discriminator for jump-to-future actions.
pub const JUMP_TO_FUTURE: &str = "@@undoable/JUMP_TO_FUTURE";

/// Init markers reserved by the host framework. Any of these resets history.
pub const DEFAULT_INIT_TYPES: [&str; 2] = ["@@redux/INIT", "@@INIT"];

/// An action that can be routed by the coordinator.
///
/// # Example
///
/// ```rust
/// use undoable::actions::Action;
///
/// enum CounterAction {
///     Increment,
///     Undo,
/// }
///
/// impl Action for CounterAction {
///     fn action_type(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Undo => undoable::actions::UNDO,
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Increment.action_type(), "INCREMENT");
/// assert_eq!(CounterAction::Undo.index(), None);
/// ```
pub trait Action {
    /// The discriminator matched against configured action types.
    fn action_type(&self) -> &str;

    /// Target index, only meaningful for jump actions.
    fn index(&self) -> Option<usize> {
        None
    }
}

/// Plain action value: a discriminator plus an optional jump index.
///
/// Serializes as `{ "type": ..., "index": ... }`, omitting `index` when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl BasicAction {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            index: None,
        }
    }

    pub fn with_index(action_type: impl Into<String>, index: usize) -> Self {
        Self {
            action_type: action_type.into(),
            index: Some(index),
        }
    }
}

impl Action for BasicAction {
    fn action_type(&self) -> &str {
        &self.action_type
    }

    fn index(&self) -> Option<usize> {
        self.index
    }
}

/// Creators for the default control actions.
pub struct ActionCreators;

impl ActionCreators {
    pub fn undo() -> BasicAction {
        BasicAction::new(UNDO)
    }

    pub fn redo() -> BasicAction {
        BasicAction::new(REDO)
    }

    pub fn jump_to_past(index: usize) -> BasicAction {
        BasicAction::with_index(JUMP_TO_PAST, index)
    }

    pub fn jump_to_future(index: usize) -> BasicAction {
        BasicAction::with_index(JUMP_TO_FUTURE, index)
    }
}
