//! End-to-end attempts through the service task with a scripted provider:
//! submit → external call → settlement → published display state.

use std::sync::Arc;

use reclaim_nullables::NullProvider;
use reclaim_types::AppCredentials;
use reclaim_verification::{
    DisplayState, ReasonCode, ServiceHandle, VerificationController, VerificationFailure,
    VerificationService,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn start(provider: Arc<NullProvider>) -> ServiceHandle {
    let creds = AppCredentials::new("0xapp", "0xsecret").expect("credentials");
    let (handle, _task) = VerificationService::spawn(VerificationController::new(creds), provider);
    handle
}

async fn run_attempt(handle: &ServiceHandle, provider_id: &str) -> DisplayState {
    handle.set_input(provider_id).await.unwrap();
    assert!(handle.submit().await.unwrap(), "submit should be accepted");
    handle.wait_settled().await.unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_shows_formatted_result() {
    let provider = Arc::new(NullProvider::succeeding(json!({ "sessionId": "s1" })));
    let handle = start(Arc::clone(&provider));

    let display = run_attempt(&handle, "abc123").await;
    assert_eq!(display.status_text, "✅ Verification successful");
    assert_eq!(display.output_text, "{\n  \"sessionId\": \"s1\"\n}");
    assert!(!display.busy);

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].provider_id().as_str(), "abc123");
    assert_eq!(requests[0].app_id(), "0xapp");
    assert_eq!(requests[0].secret(), "0xsecret");
}

#[tokio::test]
async fn cancelled_flow() {
    let provider = Arc::new(NullProvider::failing(VerificationFailure::Sdk(
        ReasonCode::Cancelled,
    )));
    let handle = start(provider);

    let display = run_attempt(&handle, "abc123").await;
    assert_eq!(display.status_text, "❌ Verification cancelled");
    assert_eq!(display.output_text, "Error: Verification cancelled");
}

#[tokio::test]
async fn whitespace_input_makes_no_call() {
    let provider = Arc::new(NullProvider::succeeding(json!({})));
    let handle = start(Arc::clone(&provider));

    handle.set_input("   ").await.unwrap();
    assert!(!handle.submit().await.unwrap());
    assert_eq!(handle.display(), DisplayState::idle());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn generic_error_shows_message() {
    let provider = Arc::new(NullProvider::failing(VerificationFailure::Generic(
        "network timeout".into(),
    )));
    let handle = start(provider);

    let display = run_attempt(&handle, "abc123").await;
    assert_eq!(display.status_text, "❌ Verification failed");
    assert_eq!(display.output_text, "Error: network timeout");
}

#[tokio::test]
async fn unknown_error_shows_fallback_message() {
    let provider = Arc::new(NullProvider::failing(VerificationFailure::Unknown));
    let handle = start(provider);

    let display = run_attempt(&handle, "abc123").await;
    assert_eq!(display.status_text, "❌ Verification failed");
    assert_eq!(
        display.output_text,
        "Error: An unknown verification error occurred"
    );
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn busy_before_settlement_and_single_call() {
    let (provider, gate) = NullProvider::gated(vec![Ok(json!({ "sessionId": "s1" }))]);
    let provider = Arc::new(provider);
    let handle = start(Arc::clone(&provider));

    handle.set_input("abc123").await.unwrap();
    assert!(handle.submit().await.unwrap());
    assert_eq!(handle.display(), DisplayState::in_progress());

    // A second submit while in flight is rejected.
    assert!(!handle.submit().await.unwrap());

    gate.release();
    let display = handle.wait_settled().await.unwrap();
    assert_eq!(display.status_text, "✅ Verification successful");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn clear_resets_after_settlement() {
    let provider = Arc::new(NullProvider::failing(VerificationFailure::Sdk(
        ReasonCode::Failed,
    )));
    let handle = start(provider);

    run_attempt(&handle, "abc123").await;
    handle.clear().await.unwrap();
    assert_eq!(handle.display(), DisplayState::idle());

    // Input was cleared too: submitting now is a no-op.
    assert!(!handle.submit().await.unwrap());
}

#[tokio::test]
async fn clear_in_flight_discards_late_settlement() {
    let (provider, gate) = NullProvider::gated(vec![Ok(json!({ "sessionId": "s1" }))]);
    let provider = Arc::new(provider);
    let handle = start(Arc::clone(&provider));

    handle.set_input("abc123").await.unwrap();
    assert!(handle.submit().await.unwrap());
    handle.clear().await.unwrap();
    assert!(handle.display().busy);

    gate.release();
    let display = handle.wait_settled().await.unwrap();
    assert_eq!(display, DisplayState::idle());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn resubmit_after_failure_issues_new_call() {
    let provider = Arc::new(NullProvider::new(vec![
        Err(VerificationFailure::Sdk(ReasonCode::SessionExpired)),
        Ok(json!({ "sessionId": "s2" })),
    ]));
    let handle = start(Arc::clone(&provider));

    let first = run_attempt(&handle, "abc123").await;
    assert_eq!(first.status_text, "❌ Verification session expired");

    assert!(handle.submit().await.unwrap());
    let second = handle.wait_settled().await.unwrap();
    assert_eq!(second.status_text, "✅ Verification successful");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn service_stops_when_handles_dropped() {
    let creds = AppCredentials::new("0xapp", "0xsecret").unwrap();
    let provider = Arc::new(NullProvider::succeeding(json!({})));
    let (handle, task) = VerificationService::spawn(VerificationController::new(creds), provider);
    drop(handle);
    task.await.expect("service task exits cleanly");
}
