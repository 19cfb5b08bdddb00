//! Debug output for the coordinator.
//!
//! Enabled per coordinator through the builder's `debug` flag. Each reduced
//! action gets its own span; history events report sizes, never contents.

use crate::core::History;
use tracing::Span;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DebugLog {
    enabled: bool,
    limit: usize,
}

impl DebugLog {
    pub(crate) fn new(enabled: bool, limit: usize) -> Self {
        Self { enabled, limit }
    }

    /// Span covering the handling of one action.
    pub(crate) fn start(&self, action_type: &str) -> Span {
        if self.enabled {
            tracing::debug_span!("undoable", action = %action_type)
        } else {
            Span::none()
        }
    }

    pub(crate) fn event(&self, message: &str) {
        if self.enabled {
            tracing::debug!("{}", message);
        }
    }

    pub(crate) fn history<S>(&self, message: &str, history: &History<S>) {
        if !self.enabled {
            return;
        }
        tracing::debug!(
            past = history.past().len(),
            future = history.future().len(),
            initialized = history.is_initialized(),
            free = ?self.free(history),
            "{}",
            message
        );
    }

    /// Remaining capacity before the oldest past entry is dropped.
    fn free<S>(&self, history: &History<S>) -> Option<usize> {
        (self.limit > 0).then(|| self.limit.saturating_sub(history.length()))
    }
}
