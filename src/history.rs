//! history.rs — bounded in-memory list of the most recent analysis results.
//! Prepend-and-truncate semantics: newest first, oldest dropped past capacity.
//! Never persisted; process restart clears it.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::analyzer::SentimentResult;

#[derive(Debug)]
pub struct RecentHistory {
    inner: Mutex<VecDeque<SentimentResult>>,
    cap: usize,
}

/// Default number of recent analyses kept for the history list.
pub const DEFAULT_CAPACITY: usize = 5;

impl RecentHistory {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, 1_000);
        Self {
            inner: Mutex::new(VecDeque::with_capacity(cap)),
            cap,
        }
    }

    pub fn push(&self, result: SentimentResult) {
        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push_front(result);
        v.truncate(self.cap);
    }

    /// Snapshot of all held entries, most recent first.
    pub fn snapshot(&self) -> Vec<SentimentResult> {
        let v = self.inner.lock().expect("history mutex poisoned");
        v.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
