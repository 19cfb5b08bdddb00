//! Coordinator that applies actions to wrapped history state.

use crate::actions::{Action, Command};
use crate::builder::{UndoableBuilder, UndoableConfig};
use crate::coordinator::debug::DebugLog;
use crate::coordinator::error::UndoError;
use crate::coordinator::state::UndoableState;
use crate::core::History;

/// Host state-update function: `(previous present, action) -> next state`.
///
/// The previous present is `None` while history is uninitialized.
pub type Reducer<S, A> = Box<dyn Fn(Option<&S>, &A) -> S + Send + Sync>;

/// Reducer wrapper that keeps an undo/redo history of the host state.
///
/// The coordinator itself is stateless between calls: all state lives in the
/// [`UndoableState`] threaded through [`Undoable::reduce`].
pub struct Undoable<S, A> {
    config: UndoableConfig<S, A>,
    reducer: Reducer<S, A>,
    log: DebugLog,
}

impl<S, A> Undoable<S, A>
where
    S: 'static,
    A: Action + 'static,
{
    pub fn builder() -> UndoableBuilder<S, A> {
        UndoableBuilder::new()
    }
}

impl<S, A: Action> Undoable<S, A> {
    pub(crate) fn new(config: UndoableConfig<S, A>, reducer: Reducer<S, A>) -> Self {
        let log = DebugLog::new(config.debug, config.limit);
        Self {
            config,
            reducer,
            log,
        }
    }

    pub fn config(&self) -> &UndoableConfig<S, A> {
        &self.config
    }

    /// Wrapped state holding the configured initial history.
    pub fn initial_state(&self) -> UndoableState<S> {
        UndoableState::new(self.config.initial_history.clone())
    }

    /// Apply one action, returning the next wrapped state.
    ///
    /// Undo and redo with nothing to move are no-ops. Jumps outside the
    /// past or future fail with [`UndoError::History`]. A panic in the
    /// reducer or filter propagates before any new history is built.
    pub fn reduce(&self, state: UndoableState<S>, action: &A) -> Result<UndoableState<S>, UndoError> {
        let _span = self.log.start(action.action_type()).entered();
        let history = state.into_history();

        let next = match self.config.action_types.classify(action)? {
            Command::Undo => {
                let undone = history.undo();
                self.log.history("after undo", &undone);
                undone
            }
            Command::Redo => {
                let redone = history.redo();
                self.log.history("after redo", &redone);
                redone
            }
            Command::JumpToPast(index) => {
                let jumped = history.jump_to_past(index)?;
                self.log.history("after jump to past", &jumped);
                jumped
            }
            Command::JumpToFuture(index) => {
                let jumped = history.jump_to_future(index)?;
                self.log.history("after jump to future", &jumped);
                jumped
            }
            Command::Init(init) => {
                let candidate = (self.reducer)(history.present(), init);
                self.log.event("reset history due to init action");
                History::new(candidate)
            }
            Command::Domain(domain) => self.apply(history, domain),
        };

        Ok(UndoableState::new(next))
    }

    fn apply(&self, history: History<S>, action: &A) -> History<S> {
        let candidate = (self.reducer)(history.present(), action);

        if !self.config.filter.check(action, &candidate, history.present()) {
            self.log.event("filter prevented action, not storing it");
            return history.with_present(candidate);
        }

        let base = if history.is_initialized() {
            history
        } else {
            self.config.initial_history.clone()
        };
        let recorded = base.record(candidate, self.config.limit);
        self.log.history("after record", &recorded);
        recorded
    }
}
