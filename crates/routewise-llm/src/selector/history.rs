//! Usage history - session memory of automatic selections
//!
//! Tracks which model the last automatic selection chose and how many times
//! in a row. Once the streak reaches [`SWITCH_THRESHOLD`] the win
//! probabilities are biased toward the other provider family. This is a
//! nudge, not a constraint: the same model may still be picked again.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// Consecutive uses after which switching is encouraged
pub const SWITCH_THRESHOLD: u32 = 3;

/// Point-in-time view of the usage history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Model chosen by the last automatic selection (empty before the first)
    pub last_model_id: String,
    /// How many automatic selections in a row chose `last_model_id`
    pub consecutive_uses: u32,
}

impl HistorySnapshot {
    /// Whether the streak is long enough to bias toward switching
    #[must_use]
    pub fn should_switch(&self) -> bool {
        self.consecutive_uses >= SWITCH_THRESHOLD
    }

    /// Count one more automatic selection of `model_id`
    pub fn record(&mut self, model_id: &str) {
        if self.last_model_id == model_id {
            self.consecutive_uses += 1;
        } else {
            self.last_model_id = model_id.to_string();
            self.consecutive_uses = 1;
        }
    }
}

/// Mutex-guarded usage history shared by every selection in a session
///
/// Injected into the selector rather than held globally, so tests can reset
/// it and concurrent callers serialize their read-modify-write cycles.
#[derive(Debug, Default)]
pub struct UsageHistory {
    state: Mutex<HistorySnapshot>,
}

impl UsageHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub fn snapshot(&self) -> HistorySnapshot {
        self.lock().clone()
    }

    /// Record an automatic selection and return the updated state
    pub fn record(&self, model_id: &str) -> HistorySnapshot {
        let mut state = self.lock();
        state.record(model_id);
        state.clone()
    }

    /// Forget everything
    pub fn reset(&self) {
        *self.lock() = HistorySnapshot::default();
    }

    /// Run `f` with exclusive access to the state
    ///
    /// The lock is held for the whole call, so a selection that reads the
    /// streak and then records its choice cannot interleave with another.
    pub fn transact<T>(&self, f: impl FnOnce(&mut HistorySnapshot) -> T) -> T {
        let mut state = self.lock();
        f(&mut state)
    }

    fn lock(&self) -> MutexGuard<'_, HistorySnapshot> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_record_counts_streak() {
        let history = UsageHistory::new();
        assert_eq!(history.snapshot(), HistorySnapshot::default());

        history.record("a");
        history.record("a");
        let state = history.record("a");
        assert_eq!(state.last_model_id, "a");
        assert_eq!(state.consecutive_uses, 3);
        assert!(state.should_switch());

        let state = history.record("b");
        assert_eq!(state.last_model_id, "b");
        assert_eq!(state.consecutive_uses, 1);
        assert!(!state.should_switch());
    }

    #[test]
    fn test_reset() {
        let history = UsageHistory::new();
        history.record("a");
        history.reset();
        assert_eq!(history.snapshot(), HistorySnapshot::default());
    }

    #[test]
    fn test_concurrent_records_are_not_lost() {
        let history = Arc::new(UsageHistory::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let history = Arc::clone(&history);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        history.transact(|state| state.record("same-model"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(history.snapshot().consecutive_uses, 800);
    }
}
