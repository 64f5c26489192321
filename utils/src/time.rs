//! Time formatting helpers.

use reclaim_types::Timestamp;

/// Format a timestamp as a `HH:MM:SS` UTC wall-clock time.
pub fn format_clock(ts: Timestamp) -> String {
    let secs = ts.secs_of_day();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
