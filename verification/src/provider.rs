//! The external verification operation.
//!
//! How identity or data is actually proven lives entirely behind this trait.
//! Implementations might include:
//! - An HTTP bridge to a native in-app SDK host
//! - A scripted provider for deterministic tests

use std::future::Future;

use reclaim_types::VerificationRequest;
use serde_json::Value;

use crate::error::VerificationFailure;

/// Settlement of one verification operation.
pub type VerificationResult = Result<Value, VerificationFailure>;

/// A pluggable verification operation.
pub trait VerificationProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Run one verification to completion.
    ///
    /// Settles with an arbitrary JSON result payload or a [`VerificationFailure`].
    /// Called at most once per accepted submit; implementations must not retry.
    fn start_verification(
        &self,
        request: VerificationRequest,
    ) -> impl Future<Output = VerificationResult> + Send;
}
