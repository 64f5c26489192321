//! The configuration handed to the external verification operation.

use serde::Serialize;

use crate::{AppCredentials, ProviderId};

/// One verification request: the fixed application credentials plus the
/// provider identifier supplied for this attempt.
///
/// Serializes with camelCase keys (`appId`, `secret`, `providerId`).
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    app_id: String,
    secret: String,
    provider_id: ProviderId,
}

impl VerificationRequest {
    pub fn new(credentials: &AppCredentials, provider_id: ProviderId) -> Self {
        Self {
            app_id: credentials.app_id().to_string(),
            secret: credentials.secret().to_string(),
            provider_id,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }
}

impl std::fmt::Debug for VerificationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationRequest")
            .field("app_id", &self.app_id)
            .field("provider_id", &self.provider_id)
            .finish_non_exhaustive()
    }
}
