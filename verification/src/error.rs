use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failure raised by the external verification operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    /// A verification-specific failure carrying the provider's reason code.
    #[error("verification failure: {0}")]
    Sdk(ReasonCode),

    /// Any other error that carries a textual description.
    #[error("{0}")]
    Generic(String),

    /// An error with no description available.
    #[error("unknown verification error")]
    Unknown,
}

/// The service task has stopped and no longer accepts commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("verification service has stopped")]
pub struct ServiceClosed;

/// Reason code carried by a verification-specific failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    Cancelled,
    Dismissed,
    SessionExpired,
    Failed,
    /// A reason code this client does not know about.
    Other(String),
}

impl ReasonCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cancelled => "cancelled",
            Self::Dismissed => "dismissed",
            Self::SessionExpired => "sessionExpired",
            Self::Failed => "failed",
            Self::Other(code) => code,
        }
    }
}

impl FromStr for ReasonCode {
    type Err = std::convert::Infallible;

    /// Case-insensitive; `session_expired` and `sessionExpired` both match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Ok(match normalized.as_str() {
            "cancelled" | "canceled" => Self::Cancelled,
            "dismissed" => Self::Dismissed,
            "sessionexpired" => Self::SessionExpired,
            "failed" => Self::Failed,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_reason_codes() {
        assert_eq!("Cancelled".parse::<ReasonCode>().unwrap(), ReasonCode::Cancelled);
        assert_eq!("dismissed".parse::<ReasonCode>().unwrap(), ReasonCode::Dismissed);
        assert_eq!(
            "session_expired".parse::<ReasonCode>().unwrap(),
            ReasonCode::SessionExpired
        );
        assert_eq!(
            "SessionExpired".parse::<ReasonCode>().unwrap(),
            ReasonCode::SessionExpired
        );
        assert_eq!("FAILED".parse::<ReasonCode>().unwrap(), ReasonCode::Failed);
    }

    #[test]
    fn unknown_reason_code_is_preserved() {
        assert_eq!(
            "rateLimited".parse::<ReasonCode>().unwrap(),
            ReasonCode::Other("rateLimited".into())
        );
    }

    #[test]
    fn generic_failure_displays_description() {
        let failure = VerificationFailure::Generic("network timeout".into());
        assert_eq!(failure.to_string(), "network timeout");
    }
}
