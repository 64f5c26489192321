//! Fixed application credentials sent with every verification request.

use serde::Deserialize;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::TypesError;

/// Application identifier and secret issued by the verification provider.
///
/// Loaded once at startup and read-only afterwards. The secret is zeroized on
/// drop and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AppCredentials {
    app_id: String,
    secret: String,
}

/// On-disk shape of the secrets file.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
struct SecretsFile {
    #[serde(rename = "RECLAIM_APP_ID")]
    app_id: String,
    #[serde(rename = "RECLAIM_APP_SECRET")]
    app_secret: String,
}

impl AppCredentials {
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Result<Self, TypesError> {
        let app_id = app_id.into();
        let secret = secret.into();
        if app_id.trim().is_empty() {
            return Err(TypesError::BlankCredential("app id"));
        }
        if secret.trim().is_empty() {
            return Err(TypesError::BlankCredential("app secret"));
        }
        Ok(Self { app_id, secret })
    }

    /// Parse a `secrets.json` document:
    /// `{"RECLAIM_APP_ID": "...", "RECLAIM_APP_SECRET": "..."}`.
    pub fn from_secrets_json(s: &str) -> Result<Self, TypesError> {
        let mut file: SecretsFile =
            serde_json::from_str(s).map_err(|e| TypesError::InvalidSecrets(e.to_string()))?;
        Self::new(
            std::mem::take(&mut file.app_id),
            std::mem::take(&mut file.app_secret),
        )
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCredentials")
            .field("app_id", &self.app_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
