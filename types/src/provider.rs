//! Provider identifier as typed by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// Names the verification provider (or template) to invoke.
///
/// Holds the text exactly as the user typed it. Construction rejects empty and
/// whitespace-only input, so a `ProviderId` is always submittable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);

impl ProviderId {
    /// Validate raw input text.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if is_blank(&s) {
            return Err(TypesError::BlankProviderId);
        }
        Ok(Self(s))
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether the input would be rejected on submit.
fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProviderId {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<ProviderId> for String {
    fn from(id: ProviderId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(ProviderId::parse(""), Err(TypesError::BlankProviderId)));
        assert!(matches!(ProviderId::parse("   "), Err(TypesError::BlankProviderId)));
        assert!(matches!(ProviderId::parse("\t\n "), Err(TypesError::BlankProviderId)));
    }

    #[test]
    fn keeps_text_as_typed() {
        let id = ProviderId::parse(" abc123 ").unwrap();
        assert_eq!(id.as_str(), " abc123 ");
    }

    #[test]
    fn deserialize_rejects_blank() {
        let err = serde_json::from_str::<ProviderId>("\"  \"");
        assert!(err.is_err());
        let ok: ProviderId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(ok.as_str(), "abc123");
    }
}
