//! Fundamental types for the in-app verification client.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! provider identifiers, application credentials, the request handed to the
//! external verification operation, and timestamps.

pub mod credentials;
pub mod error;
pub mod provider;
pub mod request;
pub mod time;

pub use credentials::AppCredentials;
pub use error::TypesError;
pub use provider::ProviderId;
pub use request::VerificationRequest;
pub use time::Timestamp;
