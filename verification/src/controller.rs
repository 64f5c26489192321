//! Verification attempt controller.
//!
//! Owns the attempt lifecycle and the [`DisplayState`] derived from it. The
//! controller never awaits anything itself: [`VerificationController::submit`]
//! hands back a [`PendingAttempt`] for the caller to run against a provider,
//! and the outcome comes back through [`VerificationController::settle`].

use reclaim_types::{AppCredentials, ProviderId, VerificationRequest};
use tracing::{debug, info, warn};

use crate::classifier::classify;
use crate::formatter::format_result;
use crate::provider::VerificationResult;
use crate::state::{AttemptStatus, DisplayState};

/// Identifies one accepted submit. Monotonically increasing per controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// An accepted submit awaiting its external call.
#[derive(Debug)]
pub struct PendingAttempt {
    pub id: AttemptId,
    pub request: VerificationRequest,
}

/// What [`VerificationController::settle`] did with an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The outcome now drives the display.
    Recorded,
    /// The attempt was cleared while in flight; the outcome was dropped.
    Abandoned,
    /// The outcome does not belong to the outstanding attempt.
    Stale,
}

/// Serializes verification attempts and derives what the user sees.
pub struct VerificationController {
    credentials: AppCredentials,
    /// Provider identifier as typed so far.
    input: String,
    status: AttemptStatus,
    display: DisplayState,
    /// The attempt whose settlement is awaited, if any.
    outstanding: Option<AttemptId>,
    /// Set by `clear` while in flight: the outstanding settlement is dropped.
    abandoned: bool,
    last_id: u64,
}

impl VerificationController {
    pub fn new(credentials: AppCredentials) -> Self {
        Self {
            credentials,
            input: String::new(),
            status: AttemptStatus::Idle,
            display: DisplayState::idle(),
            outstanding: None,
            abandoned: false,
            last_id: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the provider identifier text (user keystrokes).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn status(&self) -> AttemptStatus {
        self.status
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_busy(&self) -> bool {
        self.display.busy
    }

    /// Accept the current input as a new attempt.
    ///
    /// Returns `None` without touching any state when the input is blank or an
    /// attempt is already outstanding. On acceptance the previous result is
    /// cleared, `busy` is set, and the caller must run the returned request
    /// exactly once and report back via [`settle`](Self::settle).
    pub fn submit(&mut self) -> Option<PendingAttempt> {
        if self.outstanding.is_some() {
            debug!("submit ignored: an attempt is already in progress");
            return None;
        }
        let provider_id = match ProviderId::parse(self.input.as_str()) {
            Ok(id) => id,
            Err(_) => {
                debug!("submit ignored: provider id is blank");
                return None;
            }
        };

        self.last_id += 1;
        let id = AttemptId(self.last_id);
        self.outstanding = Some(id);
        self.abandoned = false;
        self.transition(AttemptStatus::InProgress, DisplayState::in_progress());

        info!(attempt = id.0, provider_id = %provider_id, "verification submitted");
        Some(PendingAttempt {
            id,
            request: VerificationRequest::new(&self.credentials, provider_id),
        })
    }

    /// Record the settlement of an attempt previously returned by `submit`.
    pub fn settle(&mut self, id: AttemptId, outcome: VerificationResult) -> Settlement {
        if self.outstanding != Some(id) {
            debug!(attempt = id.0, "dropping settlement for unknown attempt");
            return Settlement::Stale;
        }
        self.outstanding = None;

        if std::mem::take(&mut self.abandoned) {
            debug!(attempt = id.0, "dropping settlement for cleared attempt");
            self.transition(AttemptStatus::Idle, DisplayState::idle());
            return Settlement::Abandoned;
        }

        match outcome {
            Ok(value) => {
                let output = format_result(&value);
                debug!(attempt = id.0, result = %output, "verification result");
                info!(attempt = id.0, "verification successful");
                self.transition(AttemptStatus::Succeeded, DisplayState::succeeded(output));
            }
            Err(failure) => {
                let classified = classify(&failure);
                warn!(
                    attempt = id.0,
                    category = ?classified.category,
                    error = %failure,
                    "verification did not succeed"
                );
                self.transition(classified.category.into(), DisplayState::failed(&classified));
            }
        }
        Settlement::Recorded
    }

    /// Reset the input and the visible result.
    ///
    /// While an attempt is outstanding the visible fields reset immediately but
    /// `busy` stays set until the call settles; that settlement is then dropped.
    pub fn clear(&mut self) {
        self.input.clear();
        if self.outstanding.is_some() {
            debug!("clear while in progress: pending settlement will be dropped");
            self.abandoned = true;
            self.display = DisplayState::in_progress();
            return;
        }
        self.transition(AttemptStatus::Idle, DisplayState::idle());
    }

    fn transition(&mut self, status: AttemptStatus, display: DisplayState) {
        if self.status != status {
            debug!(from = ?self.status, to = ?status, "attempt status changed");
        }
        self.status = status;
        self.display = display;
    }
}
