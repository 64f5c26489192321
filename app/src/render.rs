//! Terminal rendering of the published display state.

use reclaim_types::Timestamp;
use reclaim_utils::format_clock;
use reclaim_verification::DisplayState;
use serde_json::json;

/// Shown while a verification is outstanding.
const BUSY_LINE: &str = "⏳ Verifying…";

/// Renders display states as text or JSON lines.
///
/// The clock time next to a status is taken when that status first appears
/// and is not part of the verification state.
pub struct Renderer {
    json: bool,
    last_status: String,
    stamped_at: Option<Timestamp>,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            last_status: String::new(),
            stamped_at: None,
        }
    }

    /// Forget the current clock time so the next status is stamped afresh.
    ///
    /// Call on every accepted submit: the busy frame in between may never be
    /// rendered when updates coalesce.
    pub fn reset_clock(&mut self) {
        self.last_status.clear();
        self.stamped_at = None;
    }

    pub fn render(&mut self, display: &DisplayState, now: Timestamp) -> String {
        if display.busy || display.status_text.is_empty() {
            self.stamped_at = None;
        } else if self.stamped_at.is_none() || display.status_text != self.last_status {
            self.stamped_at = Some(now);
        }
        self.last_status.clone_from(&display.status_text);

        let time = self.stamped_at.map(format_clock);
        if self.json {
            return json!({
                "statusText": display.status_text,
                "outputText": display.output_text,
                "busy": display.busy,
                "time": time,
            })
            .to_string();
        }

        if display.busy {
            return BUSY_LINE.to_string();
        }
        match time {
            Some(time) if display.output_text.is_empty() => {
                format!("{}  [{time}]", display.status_text)
            }
            Some(time) => format!("{}  [{time}]\n{}", display.status_text, display.output_text),
            None => "(cleared)".to_string(),
        }
    }
}
