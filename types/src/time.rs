//! Timestamp type used for display-side clock rendering.
//!
//! Timestamps are Unix epoch seconds (UTC). They are never part of the
//! verification state; the presentation layer takes one when a status appears.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// A clock set before the Unix epoch reads as [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| Self(d.as_secs()))
            .unwrap_or(Self::EPOCH)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds of the current UTC day, `0..86400`.
    pub fn secs_of_day(&self) -> u64 {
        self.0 % 86_400
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
