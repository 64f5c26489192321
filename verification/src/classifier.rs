//! Maps a raised verification failure to a user-facing status category.
//!
//! Total and pure: every [`VerificationFailure`] maps to exactly one
//! [`ClassifiedFailure`].

use serde::Serialize;

use crate::error::{ReasonCode, VerificationFailure};
use crate::state::AttemptStatus;

/// Detail shown when the failure carries no description.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown verification error occurred";

/// User-facing failure categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureCategory {
    Cancelled,
    Dismissed,
    Expired,
    Failed,
}

impl FailureCategory {
    /// Status line shown for this category.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Cancelled => "❌ Verification cancelled",
            Self::Dismissed => "❌ Verification dismissed",
            Self::Expired => "❌ Verification session expired",
            Self::Failed => "❌ Verification failed",
        }
    }
}

impl From<FailureCategory> for AttemptStatus {
    fn from(category: FailureCategory) -> Self {
        match category {
            FailureCategory::Cancelled => Self::Cancelled,
            FailureCategory::Dismissed => Self::Dismissed,
            FailureCategory::Expired => Self::Expired,
            FailureCategory::Failed => Self::Failed,
        }
    }
}

/// A failure after classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassifiedFailure {
    pub category: FailureCategory,
    /// Detail text only; it never includes the `Error: ` prefix, which
    /// [`ClassifiedFailure::output_text`] adds.
    pub message: String,
}

impl ClassifiedFailure {
    pub fn status_text(&self) -> &'static str {
        self.category.status_text()
    }

    pub fn output_text(&self) -> String {
        format!("Error: {}", self.message)
    }
}

/// Classify a failure raised by the verification operation.
pub fn classify(failure: &VerificationFailure) -> ClassifiedFailure {
    let (category, message) = match failure {
        VerificationFailure::Sdk(reason) => match reason {
            ReasonCode::Cancelled => (
                FailureCategory::Cancelled,
                "Verification cancelled".to_string(),
            ),
            ReasonCode::Dismissed => (
                FailureCategory::Dismissed,
                "Verification dismissed".to_string(),
            ),
            ReasonCode::SessionExpired => (
                FailureCategory::Expired,
                "Verification session expired".to_string(),
            ),
            ReasonCode::Failed | ReasonCode::Other(_) => {
                (FailureCategory::Failed, "Verification failed".to_string())
            }
        },
        VerificationFailure::Generic(description) => {
            (FailureCategory::Failed, description.clone())
        }
        VerificationFailure::Unknown => {
            (FailureCategory::Failed, UNKNOWN_ERROR_MESSAGE.to_string())
        }
    };
    ClassifiedFailure { category, message }
}
