// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for record timestamps and reset-ticket expiry checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
