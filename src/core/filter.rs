//! Filter predicates deciding which state changes are recorded.
//!
//! A filter sees the incoming action, the candidate state produced by the
//! host reducer and the previous present. Returning `false` keeps the
//! candidate as the present without adding a history entry.

use crate::actions::Action;
use std::collections::HashSet;
use std::sync::Arc;

type Predicate<S, A> = dyn Fn(&A, &S, Option<&S>) -> bool + Send + Sync;

/// Pure predicate over `(action, candidate, previous)`.
///
/// # Example
///
/// ```rust
/// use undoable::actions::BasicAction;
/// use undoable::core::Filter;
///
/// // Only record even counter values
/// let filter = Filter::new(|_action: &BasicAction, candidate: &i32, _previous| candidate % 2 == 0);
///
/// let action = BasicAction::new("INCREMENT");
/// assert!(filter.check(&action, &2, Some(&1)));
/// assert!(!filter.check(&action, &3, Some(&2)));
/// ```
pub struct Filter<S, A> {
    predicate: Arc<Predicate<S, A>>,
}

impl<S, A> Filter<S, A> {
    /// Create a filter from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&A, &S, Option<&S>) -> bool + Send + Sync + 'static,
    {
        Filter {
            predicate: Arc::new(predicate),
        }
    }

    /// A filter that records every state change.
    pub fn always() -> Self {
        Self::new(|_, _, _| true)
    }

    /// Whether the candidate state should be recorded into history.
    pub fn check(&self, action: &A, candidate: &S, previous: Option<&S>) -> bool {
        (self.predicate)(action, candidate, previous)
    }
}

impl<S, A> Clone for Filter<S, A> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S, A> Default for Filter<S, A> {
    fn default() -> Self {
        Self::always()
    }
}

/// Record only when the candidate differs from the previous present.
pub fn distinct_state<S, A>() -> Filter<S, A>
where
    S: PartialEq,
{
    Filter::new(|_, candidate: &S, previous: Option<&S>| previous != Some(candidate))
}

/// Record only actions whose type is listed.
///
/// # Example
///
/// ```rust
/// use undoable::actions::BasicAction;
/// use undoable::core::include_action;
///
/// let filter = include_action::<i32, BasicAction>(["ADD", "REMOVE"]);
///
/// assert!(filter.check(&BasicAction::new("ADD"), &1, None));
/// assert!(!filter.check(&BasicAction::new("SELECT"), &1, None));
/// ```
pub fn include_action<S, A>(action_types: impl IntoIterator<Item = impl Into<String>>) -> Filter<S, A>
where
    A: Action,
{
    let listed = collect_types(action_types);
    Filter::new(move |action: &A, _, _| listed.contains(action.action_type()))
}

/// Record every action except those whose type is listed.
pub fn exclude_action<S, A>(action_types: impl IntoIterator<Item = impl Into<String>>) -> Filter<S, A>
where
    A: Action,
{
    let listed = collect_types(action_types);
    Filter::new(move |action: &A, _, _| !listed.contains(action.action_type()))
}

/// Old name of [`include_action`].
#[deprecated(note = "use `include_action` instead")]
pub fn if_action<S, A>(action_types: impl IntoIterator<Item = impl Into<String>>) -> Filter<S, A>
where
    A: Action,
{
    tracing::warn!("`if_action` is deprecated, use `include_action` instead");
    include_action(action_types)
}

fn collect_types(action_types: impl IntoIterator<Item = impl Into<String>>) -> HashSet<String> {
    action_types.into_iter().map(Into::into).collect()
}
