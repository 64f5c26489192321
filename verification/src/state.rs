//! Attempt status and the display projection derived from it.

use serde::Serialize;

use crate::classifier::ClassifiedFailure;

/// Status line shown after a successful attempt.
pub const SUCCESS_STATUS: &str = "✅ Verification successful";

/// The lifecycle status of the current verification attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttemptStatus {
    /// Nothing submitted, or cleared.
    Idle,
    /// Awaiting settlement of the external operation.
    InProgress,
    Succeeded,
    Cancelled,
    Dismissed,
    Expired,
    Failed,
}

impl AttemptStatus {
    /// Whether the attempt has settled (success or any failure).
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Idle | Self::InProgress)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// What the presentation layer renders.
///
/// Replaced wholesale on every transition, never patched field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub status_text: String,
    pub output_text: String,
    pub busy: bool,
}

impl DisplayState {
    /// All fields empty, not busy.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Fields cleared while a request is outstanding.
    pub fn in_progress() -> Self {
        Self {
            busy: true,
            ..Self::default()
        }
    }

    pub fn succeeded(output_text: String) -> Self {
        Self {
            status_text: SUCCESS_STATUS.to_string(),
            output_text,
            busy: false,
        }
    }

    pub fn failed(failure: &ClassifiedFailure) -> Self {
        Self {
            status_text: failure.status_text().to_string(),
            output_text: failure.output_text(),
            busy: false,
        }
    }
}
