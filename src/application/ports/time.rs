// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Timestamps for `created_at` / `updated_at`; swapped for a fixed clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
