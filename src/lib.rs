//! Undoable: a bounded, persistent undo/redo history engine
//!
//! Undoable wraps a host reducer (`previous state × action → next state`)
//! and keeps an immutable record of past, present and future states. The
//! history store is a pure core: every transition returns a new history and
//! shares unchanged snapshots with the version it came from.
//!
//! # Core Concepts
//!
//! - **History**: Immutable past/present/future triple with record, undo,
//!   redo and jump transitions
//! - **Filter**: Pure predicate deciding whether a state change is recorded
//! - **Coordinator**: Routes each action to a history transition or the host
//!   reducer, applying init, filter and limit policy
//!
//! # Example
//!
//! ```rust
//! use undoable::{ActionCreators, BasicAction, Undoable};
//!
//! let todos = Undoable::builder()
//!     .initial_state(Vec::<String>::new())
//!     .limit(50)
//!     .build(|todos: Option<&Vec<String>>, action: &BasicAction| {
//!         let mut todos = todos.cloned().unwrap_or_default();
//!         if action.action_type == "ADD_TODO" {
//!             todos.push(format!("todo #{}", todos.len() + 1));
//!         }
//!         todos
//!     })
//!     .unwrap();
//!
//! let state = todos.initial_state();
//! let state = todos.reduce(state, &BasicAction::new("ADD_TODO")).unwrap();
//! let state = todos.reduce(state, &BasicAction::new("ADD_TODO")).unwrap();
//! assert_eq!(state.present().map(Vec::len), Some(2));
//!
//! let state = todos.reduce(state, &ActionCreators::undo()).unwrap();
//! assert_eq!(state.present().map(Vec::len), Some(1));
//! assert_eq!(state.future().len(), 1);
//! ```

pub mod actions;
pub mod builder;
pub mod coordinator;
pub mod core;

// Re-export commonly used types
pub use actions::{Action, ActionCreators, BasicAction};
pub use builder::{BuildError, UndoableBuilder};
pub use coordinator::{Undoable, UndoableState, UndoError};
pub use crate::core::{Filter, History, HistoryError};
