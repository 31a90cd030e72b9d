//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Timestamp-based generators read the clock through this trait so a frozen
/// or replayed clock can stand in for the system clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
