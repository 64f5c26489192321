//! Verification attempt lifecycle.
//!
//! A single attempt moves `Idle → InProgress → Settled` and back:
//! 1. **Submit**: the controller validates the provider identifier and hands a
//!    request to the external verification operation exactly once.
//! 2. **Settle**: the operation's result is formatted for display, or its
//!    failure is classified into a user-facing category.
//! 3. **Clear**: the visible fields are reset for the next attempt.
//!
//! The external operation is opaque and pluggable via [`VerificationProvider`].
//! [`VerificationService`] drives a controller on a single tokio task.

pub mod classifier;
pub mod controller;
pub mod error;
pub mod formatter;
pub mod provider;
pub mod service;
pub mod state;

pub use classifier::{classify, ClassifiedFailure, FailureCategory};
pub use controller::{AttemptId, PendingAttempt, Settlement, VerificationController};
pub use error::{ReasonCode, ServiceClosed, VerificationFailure};
pub use formatter::format_result;
pub use provider::{VerificationProvider, VerificationResult};
pub use service::{ServiceHandle, VerificationService};
pub use state::{AttemptStatus, DisplayState};
