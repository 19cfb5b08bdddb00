//! Persistent undo/redo history.
//!
//! A `History` is an immutable triple of past states, the present state and
//! undone (future) states. Every transition returns a new history; snapshots
//! are held behind `Arc` so versions share the states they have in common.

use super::error::{Direction, HistoryError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ordered record of past, present and future states.
///
/// History is immutable - every transition method returns a new history and
/// leaves `self` untouched. Cloning a history never clones a state.
///
/// # Example
///
/// ```rust
/// use undoable::core::History;
///
/// let history = History::new(0);
/// let history = history.record(1, 0);
/// let history = history.record(2, 0);
///
/// let undone = history.undo();
/// assert_eq!(undone.present(), Some(&1));
/// assert_eq!(undone.future().len(), 1);
///
/// // The original is unchanged
/// assert_eq!(history.present(), Some(&2));
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(
    try_from = "RawHistory<S>",
    bound(deserialize = "S: Deserialize<'de>")
)]
pub struct History<S> {
    past: Vec<Arc<S>>,
    present: Option<Arc<S>>,
    future: Vec<Arc<S>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
struct RawHistory<S> {
    #[serde(default)]
    past: Vec<Arc<S>>,
    present: Option<Arc<S>>,
    #[serde(default)]
    future: Vec<Arc<S>>,
}

impl<S> TryFrom<RawHistory<S>> for History<S> {
    type Error = String;

    fn try_from(raw: RawHistory<S>) -> Result<Self, Self::Error> {
        if raw.present.is_none() && !(raw.past.is_empty() && raw.future.is_empty()) {
            return Err("history without a present state must have empty past and future".into());
        }
        Ok(Self {
            past: raw.past,
            present: raw.present,
            future: raw.future,
        })
    }
}

impl<S> Clone for History<S> {
    fn clone(&self) -> Self {
        Self {
            past: self.past.clone(),
            present: self.present.clone(),
            future: self.future.clone(),
        }
    }
}

impl<S: PartialEq> PartialEq for History<S> {
    fn eq(&self, other: &Self) -> bool {
        self.past == other.past && self.present == other.present && self.future == other.future
    }
}

impl<S: Eq> Eq for History<S> {}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl<S> History<S> {
    /// Create a history that has no present state yet.
    ///
    /// The first `record` on an uninitialized history installs the recorded
    /// state as the present without touching `past`.
    pub fn uninitialized() -> Self {
        Self {
            past: Vec::new(),
            present: None,
            future: Vec::new(),
        }
    }

    /// Create a history whose only version is `present`.
    pub fn new(present: S) -> Self {
        Self {
            past: Vec::new(),
            present: Some(Arc::new(present)),
            future: Vec::new(),
        }
    }

    /// Create a history from explicit parts.
    ///
    /// `past` is ordered oldest first, `future` nearest-undo first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let history = History::from_parts([0, 1], 2, [3]);
    /// assert_eq!(history.length(), 4);
    /// assert!(history.can_undo());
    /// assert!(history.can_redo());
    /// ```
    pub fn from_parts(
        past: impl IntoIterator<Item = S>,
        present: S,
        future: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            past: past.into_iter().map(Arc::new).collect(),
            present: Some(Arc::new(present)),
            future: future.into_iter().map(Arc::new).collect(),
        }
    }

    /// Total number of tracked versions: past, present and future.
    pub fn length(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.present.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Past states, oldest first.
    pub fn past(&self) -> &[Arc<S>] {
        &self.past
    }

    /// The present state, or `None` before the history is initialized.
    pub fn present(&self) -> Option<&S> {
        self.present.as_deref()
    }

    /// Undone states, nearest first.
    pub fn future(&self) -> &[Arc<S>] {
        &self.future
    }

    /// Record `state` as the new present, returning a new history.
    ///
    /// The old present moves to the end of `past` and `future` is cleared.
    /// With `limit > 0`, when `length()` (future included) has reached
    /// `limit` the oldest past entry is dropped first; `limit == 0` means
    /// unbounded. The result never holds more than `limit` versions.
    /// Recording into an uninitialized history only installs the present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let mut history = History::new(0);
    /// for state in 1..=4 {
    ///     history = history.record(state, 3);
    /// }
    ///
    /// let past: Vec<i32> = history.past().iter().map(|s| **s).collect();
    /// assert_eq!(past, vec![2, 3]);
    /// assert_eq!(history.present(), Some(&4));
    /// assert!(history.future().is_empty());
    /// ```
    pub fn record(&self, state: S, limit: usize) -> Self {
        let Some(present) = &self.present else {
            return Self::new(state);
        };

        let overflow = limit > 0 && self.length() >= limit;
        let kept = if overflow {
            &self.past[self.past.len().min(1)..]
        } else {
            &self.past[..]
        };

        let mut past = Vec::with_capacity(kept.len() + 1);
        past.extend(kept.iter().cloned());
        past.push(Arc::clone(present));

        if limit > 0 {
            // Limit of one, or a history already larger than the limit.
            let excess = (past.len() + 1).saturating_sub(limit);
            past.drain(..excess);
        }

        Self {
            past,
            present: Some(Arc::new(state)),
            future: Vec::new(),
        }
    }

    /// Step back one version.
    ///
    /// Returns an unchanged copy (sharing every snapshot) when there is
    /// nothing to undo.
    pub fn undo(&self) -> Self {
        let (Some((previous, rest)), Some(present)) = (self.past.split_last(), &self.present)
        else {
            return self.clone();
        };

        let mut future = Vec::with_capacity(self.future.len() + 1);
        future.push(Arc::clone(present));
        future.extend(self.future.iter().cloned());

        Self {
            past: rest.to_vec(),
            present: Some(Arc::clone(previous)),
            future,
        }
    }

    /// Step forward one version.
    ///
    /// Returns an unchanged copy (sharing every snapshot) when there is
    /// nothing to redo.
    pub fn redo(&self) -> Self {
        let (Some((next, rest)), Some(present)) = (self.future.split_first(), &self.present)
        else {
            return self.clone();
        };

        let mut past = Vec::with_capacity(self.past.len() + 1);
        past.extend(self.past.iter().cloned());
        past.push(Arc::clone(present));

        Self {
            past,
            present: Some(Arc::clone(next)),
            future: rest.to_vec(),
        }
    }

    /// Make `future[index]` the present in one step.
    ///
    /// Everything between the present and the target moves into `past`.
    /// `index == 0` is exactly `redo`. An index outside `future` is an
    /// `InvalidIndex` error.
    pub fn jump_to_future(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.future.len() {
            return Err(HistoryError::InvalidIndex {
                direction: Direction::Future,
                index,
                len: self.future.len(),
            });
        }
        if index == 0 {
            return Ok(self.redo());
        }

        let mut past = Vec::with_capacity(self.past.len() + 1 + index);
        past.extend(self.past.iter().cloned());
        past.extend(self.present.iter().cloned());
        past.extend(self.future[..index].iter().cloned());

        Ok(Self {
            past,
            present: Some(Arc::clone(&self.future[index])),
            future: self.future[index + 1..].to_vec(),
        })
    }

    /// Make `past[index]` the present in one step.
    ///
    /// Everything between the target and the present moves into `future`.
    /// `index == past.len() - 1` is exactly `undo`. An index outside `past`
    /// is an `InvalidIndex` error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let history = History::from_parts([0, 1, 2, 3], 4, []);
    /// let jumped = history.jump_to_past(1).unwrap();
    ///
    /// let future: Vec<i32> = jumped.future().iter().map(|s| **s).collect();
    /// assert_eq!(jumped.present(), Some(&1));
    /// assert_eq!(jumped.past().len(), 1);
    /// assert_eq!(future, vec![2, 3, 4]);
    ///
    /// assert!(history.jump_to_past(4).is_err());
    /// ```
    pub fn jump_to_past(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.past.len() {
            return Err(HistoryError::InvalidIndex {
                direction: Direction::Past,
                index,
                len: self.past.len(),
            });
        }
        if index == self.past.len() - 1 {
            return Ok(self.undo());
        }

        let mut future = Vec::with_capacity(self.past.len() - index + self.future.len());
        future.extend(self.past[index + 1..].iter().cloned());
        future.extend(self.present.iter().cloned());
        future.extend(self.future.iter().cloned());

        Ok(Self {
            past: self.past[..index].to_vec(),
            present: Some(Arc::clone(&self.past[index])),
            future,
        })
    }

    /// Replace the present without recording the old one.
    ///
    /// `past` and `future` are carried over as they are.
    pub fn with_present(&self, state: S) -> Self {
        Self {
            past: self.past.clone(),
            present: Some(Arc::new(state)),
            future: self.future.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(items: &[Arc<i32>]) -> Vec<i32> {
        items.iter().map(|s| **s).collect()
    }

    #[test]
    fn uninitialized_history_has_no_present() {
        let history: History<i32> = History::uninitialized();

        assert!(!history.is_initialized());
        assert_eq!(history.present(), None);
        assert_eq!(history.length(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_initializes_empty_history() {
        let history = History::uninitialized().record(7, 3);

        assert_eq!(history.present(), Some(&7));
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
    }

    #[test]
    fn record_respects_limit() {
        let mut history = History::new(0);
        let expected_past = [vec![0], vec![0, 1], vec![1, 2], vec![2, 3]];

        for (state, expected) in (1..=4).zip(expected_past) {
            history = history.record(state, 3);
            assert_eq!(states(history.past()), expected);
            assert!(history.length() <= 3);
        }

        assert_eq!(history.present(), Some(&4));
        assert!(history.future().is_empty());
    }

    #[test]
    fn record_with_limit_one_keeps_only_present() {
        let history = History::new(0).record(1, 1).record(2, 1);

        assert!(history.past().is_empty());
        assert_eq!(history.present(), Some(&2));
        assert_eq!(history.length(), 1);
    }

    #[test]
    fn record_trims_oversized_history() {
        let history = History::from_parts([0, 1, 2, 3], 4, [5]);
        let recorded = history.record(6, 3);

        assert_eq!(states(recorded.past()), vec![3, 4]);
        assert_eq!(recorded.present(), Some(&6));
        assert!(recorded.future().is_empty());
    }

    #[test]
    fn record_counts_future_towards_limit() {
        let history = History::from_parts([0], 1, [2]);
        let recorded = history.record(9, 3);

        assert_eq!(states(recorded.past()), vec![1]);
        assert_eq!(recorded.present(), Some(&9));
        assert!(recorded.future().is_empty());
    }

    #[test]
    fn record_below_limit_keeps_past() {
        let history = History::from_parts([0], 1, [2]);
        let recorded = history.record(9, 4);

        assert_eq!(states(recorded.past()), vec![0, 1]);
    }

    #[test]
    fn record_clears_future() {
        let history = History::from_parts([0], 1, [2, 3]);
        let recorded = history.record(9, 0);

        assert_eq!(states(recorded.past()), vec![0, 1]);
        assert!(recorded.future().is_empty());
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new(0);
        let recorded = history.record(1, 0);

        assert_eq!(history.present(), Some(&0));
        assert!(history.past().is_empty());
        assert_eq!(recorded.present(), Some(&1));
    }

    #[test]
    fn undo_walks_back_then_stops() {
        let mut history = History::from_parts([0, 1, 2], 3, []);
        let mut seen = Vec::new();

        for _ in 0..3 {
            history = history.undo();
            seen.push(*history.present().unwrap());
        }
        assert_eq!(seen, vec![2, 1, 0]);

        let again = history.undo();
        assert!(again.past().is_empty());
        assert_eq!(again.present(), Some(&0));
        assert_eq!(states(again.future()), vec![1, 2, 3]);
        assert_eq!(again, history);
    }

    #[test]
    fn noop_undo_and_redo_share_snapshots() {
        let history = History::from_parts(Vec::new(), 1, Vec::new());

        let undone = history.undo();
        let redone = history.redo();

        assert!(Arc::ptr_eq(
            undone.present.as_ref().unwrap(),
            history.present.as_ref().unwrap()
        ));
        assert!(Arc::ptr_eq(
            redone.present.as_ref().unwrap(),
            history.present.as_ref().unwrap()
        ));
    }

    #[test]
    fn transitions_share_untouched_snapshots() {
        let history = History::from_parts([0, 1], 2, []);
        let undone = history.undo();

        assert!(Arc::ptr_eq(&history.past()[0], &undone.past()[0]));
        assert!(Arc::ptr_eq(
            history.present.as_ref().unwrap(),
            &undone.future()[0]
        ));
    }

    #[test]
    fn redo_moves_present_to_past() {
        let history = History::from_parts([0], 1, [2, 3]);
        let redone = history.redo();

        assert_eq!(states(redone.past()), vec![0, 1]);
        assert_eq!(redone.present(), Some(&2));
        assert_eq!(states(redone.future()), vec![3]);
    }

    #[test]
    fn jump_to_past_rearranges_history() {
        let history = History::from_parts([0, 1, 2, 3], 4, []);
        let jumped = history.jump_to_past(1).unwrap();

        assert_eq!(states(jumped.past()), vec![0]);
        assert_eq!(jumped.present(), Some(&1));
        assert_eq!(states(jumped.future()), vec![2, 3, 4]);
        assert_eq!(jumped.length(), history.length());
    }

    #[test]
    fn jump_to_past_keeps_existing_future() {
        let history = History::from_parts([0, 1, 2], 3, [4, 5]);
        let jumped = history.jump_to_past(0).unwrap();

        assert!(jumped.past().is_empty());
        assert_eq!(jumped.present(), Some(&0));
        assert_eq!(states(jumped.future()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn jump_to_future_rearranges_history() {
        let history = History::from_parts([0], 1, [2, 3, 4, 5]);
        let jumped = history.jump_to_future(2).unwrap();

        assert_eq!(states(jumped.past()), vec![0, 1, 2, 3]);
        assert_eq!(jumped.present(), Some(&4));
        assert_eq!(states(jumped.future()), vec![5]);
    }

    #[test]
    fn adjacent_jumps_match_undo_and_redo() {
        let history = History::from_parts([0, 1], 2, [3, 4]);

        assert_eq!(history.jump_to_past(1).unwrap(), history.undo());
        assert_eq!(history.jump_to_future(0).unwrap(), history.redo());
    }

    #[test]
    fn out_of_range_jumps_fail() {
        let history = History::from_parts([0, 1], 2, [3]);

        assert_eq!(
            history.jump_to_past(2),
            Err(HistoryError::InvalidIndex {
                direction: Direction::Past,
                index: 2,
                len: 2,
            })
        );
        assert_eq!(
            history.jump_to_future(1),
            Err(HistoryError::InvalidIndex {
                direction: Direction::Future,
                index: 1,
                len: 1,
            })
        );
        assert!(History::<i32>::uninitialized().jump_to_past(0).is_err());
    }

    #[test]
    fn with_present_leaves_past_and_future() {
        let history = History::from_parts([0], 1, [2]);
        let replaced = history.with_present(10);

        assert_eq!(states(replaced.past()), vec![0]);
        assert_eq!(replaced.present(), Some(&10));
        assert_eq!(states(replaced.future()), vec![2]);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::from_parts([0, 1], 2, [3]);

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "past": [0, 1], "present": 2, "future": [3] })
        );

        let deserialized: History<i32> = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, history);
    }

    #[test]
    fn deserialize_fills_missing_sequences() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Point {
            x: i32,
        }

        let json = serde_json::json!({ "present": { "x": 3 } });
        let history: History<Point> = serde_json::from_value(json).unwrap();

        assert_eq!(history.present(), Some(&Point { x: 3 }));
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
    }

    #[test]
    fn deserialize_rejects_orphaned_past() {
        let json = serde_json::json!({ "past": [0], "present": null, "future": [] });
        let result: Result<History<i32>, _> = serde_json::from_value(json);

        assert!(result.is_err());
    }
}
