// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for creation, deletion, and audit timestamps.
/// Injected so command tests can pin the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
