//! Fluent builder for the undo coordinator.

use crate::actions::{Action, ActionTypes};
use crate::builder::error::BuildError;
use crate::builder::rules;
use crate::coordinator::{Reducer, Undoable};
use crate::core::{Filter, History};
use stillwater::validation::Validation;

/// Validated configuration of an [`Undoable`] coordinator.
pub struct UndoableConfig<S, A> {
    pub(crate) initial_history: History<S>,
    pub(crate) action_types: ActionTypes,
    pub(crate) limit: usize,
    pub(crate) filter: Filter<S, A>,
    pub(crate) debug: bool,
}

impl<S, A> UndoableConfig<S, A> {
    /// History used before the first recorded action.
    pub fn initial_history(&self) -> &History<S> {
        &self.initial_history
    }

    pub fn action_types(&self) -> &ActionTypes {
        &self.action_types
    }

    /// Maximum number of tracked versions; `0` means unbounded.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn filter(&self) -> &Filter<S, A> {
        &self.filter
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// Builder for constructing an [`Undoable`] coordinator with a fluent API.
///
/// # Example
///
/// ```rust
/// use undoable::actions::{ActionCreators, BasicAction};
/// use undoable::builder::UndoableBuilder;
///
/// let counter = UndoableBuilder::<i32, BasicAction>::new()
///     .initial_state(0)
///     .limit(10)
///     .build(|state: Option<&i32>, action: &BasicAction| {
///         let state = state.copied().unwrap_or_default();
///         match action.action_type.as_str() {
///             "INCREMENT" => state + 1,
///             _ => state,
///         }
///     })
///     .unwrap();
///
/// let state = counter.initial_state();
/// let state = counter.reduce(state, &BasicAction::new("INCREMENT")).unwrap();
/// let state = counter.reduce(state, &ActionCreators::undo()).unwrap();
/// assert_eq!(state.present(), Some(&0));
/// ```
pub struct UndoableBuilder<S, A> {
    initial_state: Option<S>,
    initial_history: Option<History<S>>,
    action_types: ActionTypes,
    limit: usize,
    filter: Filter<S, A>,
    debug: bool,
}

impl<S, A> UndoableBuilder<S, A>
where
    S: 'static,
    A: Action + 'static,
{
    /// Create a new builder with default action types and no limit.
    pub fn new() -> Self {
        Self {
            initial_state: None,
            initial_history: None,
            action_types: ActionTypes::default(),
            limit: 0,
            filter: Filter::default(),
            debug: false,
        }
    }

    /// Seed history with a single present state.
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Seed history with a full past/present/future triple.
    /// Takes precedence over `initial_state`.
    pub fn initial_history(mut self, history: History<S>) -> Self {
        self.initial_history = Some(history);
        self
    }

    /// Action types that discard history and reseed it from the reducer.
    pub fn init_types<I, T>(mut self, action_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.action_types.init = action_types.into_iter().map(Into::into).collect();
        self
    }

    /// Maximum number of tracked versions; `0` means unbounded.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn filter(mut self, filter: Filter<S, A>) -> Self {
        self.filter = filter;
        self
    }

    /// Set the filter using a closure over `(action, candidate, previous)`.
    pub fn filter_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&A, &S, Option<&S>) -> bool + Send + Sync + 'static,
    {
        self.filter = Filter::new(predicate);
        self
    }

    pub fn undo_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_types.undo = action_type.into();
        self
    }

    pub fn redo_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_types.redo = action_type.into();
        self
    }

    pub fn jump_to_past_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_types.jump_to_past = action_type.into();
        self
    }

    pub fn jump_to_future_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_types.jump_to_future = action_type.into();
        self
    }

    /// Emit per-action debug spans and events through `tracing`.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Build the coordinator around the host reducer.
    /// Returns every configuration violation at once if validation fails.
    pub fn build<R>(self, reducer: R) -> Result<Undoable<S, A>, BuildError>
    where
        R: Fn(Option<&S>, &A) -> S + Send + Sync + 'static,
    {
        let initial_history = match (self.initial_history, self.initial_state) {
            (Some(history), _) => history,
            (None, Some(state)) => History::new(state),
            (None, None) => History::uninitialized(),
        };

        if let Validation::Failure(violations) =
            rules::validate(&self.action_types, &initial_history, self.limit)
        {
            return Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            ));
        }

        if self.action_types.init.is_empty() {
            tracing::warn!(
                "no init action types configured; history is only seeded from the initial state"
            );
        }

        let config = UndoableConfig {
            initial_history,
            action_types: self.action_types,
            limit: self.limit,
            filter: self.filter,
            debug: self.debug,
        };
        let reducer: Reducer<S, A> = Box::new(reducer);

        Ok(Undoable::new(config, reducer))
    }
}

impl<S, A> Default for UndoableBuilder<S, A>
where
    S: 'static,
    A: Action + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BasicAction, JUMP_TO_PAST, UNDO};
    use crate::builder::ConfigViolation;

    fn reducer(state: Option<&i32>, _action: &BasicAction) -> i32 {
        state.copied().unwrap_or_default() + 1
    }

    #[test]
    fn builder_uses_defaults() {
        let undoable = UndoableBuilder::<i32, BasicAction>::new()
            .build(reducer)
            .unwrap();
        let config = undoable.config();

        assert_eq!(config.limit(), 0);
        assert!(!config.debug());
        assert!(!config.initial_history().is_initialized());
        assert_eq!(config.action_types().undo(), UNDO);
        assert_eq!(config.action_types().init().len(), 2);
    }

    #[test]
    fn initial_state_seeds_history() {
        let undoable = UndoableBuilder::<i32, BasicAction>::new()
            .initial_state(5)
            .build(reducer)
            .unwrap();

        assert_eq!(undoable.config().initial_history().present(), Some(&5));
    }

    #[test]
    fn initial_history_takes_precedence() {
        let undoable = UndoableBuilder::<i32, BasicAction>::new()
            .initial_state(5)
            .initial_history(History::from_parts([1], 2, [3]))
            .build(reducer)
            .unwrap();

        assert_eq!(undoable.config().initial_history().present(), Some(&2));
        assert_eq!(undoable.config().initial_history().length(), 3);
    }

    #[test]
    fn overrides_are_applied() {
        let undoable = UndoableBuilder::<i32, BasicAction>::new()
            .undo_type("UNDO")
            .redo_type("REDO")
            .jump_to_past_type("BACK")
            .jump_to_future_type("FORWARD")
            .init_types(["RESET"])
            .limit(4)
            .debug(true)
            .build(reducer)
            .unwrap();
        let types = undoable.config().action_types();

        assert_eq!(types.undo(), "UNDO");
        assert_eq!(types.redo(), "REDO");
        assert_eq!(types.jump_to_past(), "BACK");
        assert_eq!(types.jump_to_future(), "FORWARD");
        assert_eq!(types.init(), ["RESET".to_string()]);
        assert_eq!(undoable.config().limit(), 4);
        assert!(undoable.config().debug());
    }

    #[test]
    fn empty_init_types_are_allowed() {
        let result = UndoableBuilder::<i32, BasicAction>::new()
            .init_types(Vec::<String>::new())
            .build(reducer);

        assert!(result.is_ok());
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = UndoableBuilder::<i32, BasicAction>::new()
            .redo_type(JUMP_TO_PAST)
            .init_types([UNDO])
            .build(reducer);

        match result {
            Err(BuildError::InvalidConfig(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&ConfigViolation::DuplicateActionType {
                    action_type: JUMP_TO_PAST.to_string(),
                    first: "redo",
                    second: "jump_to_past",
                }));
                assert!(violations.contains(&ConfigViolation::InitTypeShadowed {
                    action_type: UNDO.to_string(),
                    role: "undo",
                }));
            }
            Ok(_) => panic!("Expected violations, got a coordinator"),
        }
    }

    #[test]
    fn filter_with_installs_closure() {
        let undoable = UndoableBuilder::<i32, BasicAction>::new()
            .filter_with(|_, candidate, _| *candidate > 10)
            .build(reducer)
            .unwrap();
        let action = BasicAction::new("ADD");

        assert!(!undoable.config().filter().check(&action, &3, None));
        assert!(undoable.config().filter().check(&action, &11, None));
    }
}
