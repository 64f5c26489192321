//! Nullable provider — scripted verification outcomes.

use reclaim_types::VerificationRequest;
use reclaim_verification::{VerificationFailure, VerificationProvider, VerificationResult};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A deterministic verification provider for testing.
///
/// Returns pre-configured outcomes in order, cycling once the list is exhausted.
pub struct NullProvider {
    outcomes: Vec<VerificationResult>,
    index: Mutex<usize>,
    requests: Mutex<Vec<VerificationRequest>>,
    gate: Option<Arc<Notify>>,
}

/// Releases calls held by a gated [`NullProvider`], one per `release`.
#[derive(Clone)]
pub struct Gate(Arc<Notify>);

impl Gate {
    /// Let one held (or the next) call settle.
    pub fn release(&self) {
        self.0.notify_one();
    }
}

impl NullProvider {
    /// Create with a sequence of outcomes.
    pub fn new(outcomes: Vec<VerificationResult>) -> Self {
        Self {
            outcomes,
            index: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Every call succeeds with `value`.
    pub fn succeeding(value: Value) -> Self {
        Self::new(vec![Ok(value)])
    }

    /// Every call fails with `failure`.
    pub fn failing(failure: VerificationFailure) -> Self {
        Self::new(vec![Err(failure)])
    }

    /// Calls do not settle until released through the returned [`Gate`].
    pub fn gated(outcomes: Vec<VerificationResult>) -> (Self, Gate) {
        let notify = Arc::new(Notify::new());
        let provider = Self {
            gate: Some(Arc::clone(&notify)),
            ..Self::new(outcomes)
        };
        (provider, Gate(notify))
    }

    /// All requests received so far (for assertions).
    pub fn requests(&self) -> Vec<VerificationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_outcome(&self) -> VerificationResult {
        if self.outcomes.is_empty() {
            return Err(VerificationFailure::Generic("no scripted outcome".into()));
        }
        let mut idx = self.index.lock().unwrap();
        let current = *idx % self.outcomes.len();
        *idx += 1;
        self.outcomes[current].clone()
    }
}

impl VerificationProvider for NullProvider {
    fn name(&self) -> &str {
        "null-provider"
    }

    async fn start_verification(&self, request: VerificationRequest) -> VerificationResult {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.next_outcome()
    }
}
