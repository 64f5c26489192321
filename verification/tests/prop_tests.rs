use proptest::prelude::*;
use serde_json::Value;

use reclaim_types::AppCredentials;
use reclaim_verification::{
    classify, format_result, AttemptStatus, DisplayState, FailureCategory, ReasonCode,
    VerificationController, VerificationFailure,
};

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _:-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Formatting then reparsing yields an equal structure.
    #[test]
    fn formatted_result_round_trips(value in json_value()) {
        let text = format_result(&value);
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(&reparsed, &value);
        prop_assert_eq!(format_result(&reparsed), text);
    }

    /// Unrecognized reason codes always classify as a plain failure.
    #[test]
    fn unrecognized_reason_is_failed(code in "[a-zA-Z_]{1,20}") {
        let reason: ReasonCode = code.parse().unwrap();
        let classified = classify(&VerificationFailure::Sdk(reason.clone()));
        match reason {
            ReasonCode::Cancelled => prop_assert_eq!(classified.category, FailureCategory::Cancelled),
            ReasonCode::Dismissed => prop_assert_eq!(classified.category, FailureCategory::Dismissed),
            ReasonCode::SessionExpired => prop_assert_eq!(classified.category, FailureCategory::Expired),
            ReasonCode::Failed | ReasonCode::Other(_) => {
                prop_assert_eq!(classified.category, FailureCategory::Failed);
                prop_assert_eq!(classified.output_text(), "Error: Verification failed");
            }
        }
    }

    /// Generic errors surface their description verbatim.
    #[test]
    fn generic_error_message_is_verbatim(message in ".{0,40}") {
        let classified = classify(&VerificationFailure::Generic(message.clone()));
        prop_assert_eq!(classified.category, FailureCategory::Failed);
        prop_assert_eq!(classified.output_text(), format!("Error: {message}"));
    }

    /// Non-blank input is always accepted from idle and marks the attempt busy.
    #[test]
    fn non_blank_submit_goes_in_progress(input in "[ ]{0,3}[a-z0-9]{1,16}[ ]{0,3}") {
        let mut c = VerificationController::new(AppCredentials::new("0xapp", "0xsecret").unwrap());
        c.set_input(input.clone());
        let pending = c.submit();
        prop_assert!(pending.is_some());
        prop_assert_eq!(c.status(), AttemptStatus::InProgress);
        prop_assert!(c.is_busy());
        let pending = pending.unwrap();
        prop_assert_eq!(pending.request.provider_id().as_str(), input.as_str());
    }

    /// Blank input never changes state.
    #[test]
    fn blank_submit_is_noop(input in "[ \t\n]{0,8}") {
        let mut c = VerificationController::new(AppCredentials::new("0xapp", "0xsecret").unwrap());
        c.set_input(input);
        prop_assert!(c.submit().is_none());
        prop_assert_eq!(c.status(), AttemptStatus::Idle);
        prop_assert_eq!(c.display(), &DisplayState::idle());
    }
}
