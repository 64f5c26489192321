//! Human-readable rendering of a successful verification result.

use serde_json::Value;

/// Format a result payload as two-space indented JSON.
///
/// Object keys come out in `serde_json` map order (sorted).
pub fn format_result(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_with_two_space_indent() {
        let text = format_result(&json!({ "sessionId": "s1" }));
        assert_eq!(text, "{\n  \"sessionId\": \"s1\"\n}");
    }

    #[test]
    fn formats_nested_values() {
        let value = json!({
            "proofs": [{ "claimData": { "provider": "http" }, "signatures": ["0xabc"] }],
            "exception": null,
        });
        let text = format_result(&value);
        assert!(text.contains("\n    {\n      \"claimData\""));
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn formats_scalars() {
        assert_eq!(format_result(&Value::Null), "null");
        assert_eq!(format_result(&json!("done")), "\"done\"");
        assert_eq!(format_result(&json!([])), "[]");
    }
}
