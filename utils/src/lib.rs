//! Shared utilities for the in-app verification client.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::format_clock;
