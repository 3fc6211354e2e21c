// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// Starts at `fixed_now()` and advances one second per call so creation order
/// is observable.
pub struct FixedClock {
    ticks: AtomicI64,
}

impl FixedClock {
    pub fn new() -> Self {
        Self {
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl team_core::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::time::fixed_now() + Duration::seconds(tick)
    }
}

/// Hands out the given suffixes in order, then falls back to `zzzzzzzz`.
pub struct SequenceSuffixes {
    queue: Mutex<Vec<String>>,
}

impl SequenceSuffixes {
    pub fn new(suffixes: &[&str]) -> Self {
        let mut queue: Vec<String> = suffixes.iter().map(|s| s.to_string()).collect();
        queue.reverse();
        Self {
            queue: Mutex::new(queue),
        }
    }
}

impl team_core::application::ports::util::SuffixGenerator for SequenceSuffixes {
    fn next_suffix(&self) -> String {
        self.queue
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| "zzzzzzzz".to_string())
    }
}
