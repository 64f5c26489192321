//! HTTP-backed verification provider.

use std::time::Duration;

use reclaim_types::VerificationRequest;
use reclaim_verification::{
    ReasonCode, VerificationFailure, VerificationProvider, VerificationResult,
};
use serde_json::Value;

use crate::error::BridgeError;

/// Default timeout for a whole verification round trip. The user completes
/// the flow inside the host while the request is open.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Provider that forwards each verification to an SDK host over HTTP.
pub struct HttpProvider {
    /// HTTP client (reusable connection pool).
    http: reqwest::Client,
    endpoint: String,
}

impl HttpProvider {
    /// Create a provider targeting the host at `bridge_url`
    /// (e.g. `http://127.0.0.1:8765`).
    pub fn new(bridge_url: &str, timeout: Duration) -> Result<Self, BridgeError> {
        let base = bridge_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BridgeError::InvalidUrl(bridge_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| BridgeError::Client(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{base}/verifications"),
        })
    }

    /// The URL verification requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl VerificationProvider for HttpProvider {
    fn name(&self) -> &str {
        "http-bridge"
    }

    async fn start_verification(&self, request: VerificationRequest) -> VerificationResult {
        tracing::debug!(
            endpoint = %self.endpoint,
            provider_id = %request.provider_id(),
            "posting verification"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_failure)?;
        interpret_response(status, &body)
    }
}

fn transport_failure(e: reqwest::Error) -> VerificationFailure {
    if e.is_timeout() {
        VerificationFailure::Generic("network timeout".to_string())
    } else if e.is_connect() {
        VerificationFailure::Generic(format!("connection failed: {e}"))
    } else {
        VerificationFailure::Generic(e.to_string())
    }
}

/// Map a host response to a verification outcome.
///
/// - 2xx: the `result` field if present, else the whole JSON body.
/// - `{"error": {"type": ...}}`: an SDK failure with that reason code.
/// - `{"error": "..."}` or `{"error": {"message": ...}}`: a generic failure.
/// - `{"error": {}}`: an unknown failure.
/// - Anything else on a non-2xx status: a generic failure naming the status.
pub fn interpret_response(status: u16, body: &str) -> VerificationResult {
    let success = (200..300).contains(&status);
    let json: Option<Value> = serde_json::from_str(body).ok();

    if let Some(error) = json.as_ref().and_then(|j| j.get("error")) {
        if !error.is_null() {
            return Err(failure_from_envelope(error));
        }
    }

    match json {
        Some(mut json) if success => Ok(match json.get_mut("result").map(Value::take) {
            Some(result) => result,
            None => json,
        }),
        None if success => Err(VerificationFailure::Generic(
            "bridge returned a non-JSON response".to_string(),
        )),
        _ => Err(VerificationFailure::Generic(format!("bridge returned HTTP {status}"))),
    }
}

fn failure_from_envelope(error: &Value) -> VerificationFailure {
    if let Some(message) = error.as_str() {
        return VerificationFailure::Generic(message.to_string());
    }
    if let Some(reason) = error.get("type").and_then(Value::as_str) {
        let reason: ReasonCode = reason.parse().unwrap_or(ReasonCode::Failed);
        return VerificationFailure::Sdk(reason);
    }
    match error.get("message").and_then(Value::as_str) {
        Some(message) => VerificationFailure::Generic(message.to_string()),
        None => VerificationFailure::Unknown,
    }
}
