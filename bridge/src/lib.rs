//! HTTP bridge to the verification SDK host.
//!
//! The verification itself (provider protocol, proof generation, sessions)
//! runs inside a native SDK host process. This crate talks to that host:
//! - `POST {bridge_url}/verifications` with `{appId, secret, providerId}`
//! - The host answers with the result payload, or an error envelope carrying
//!   the SDK's reason code
//!
//! Nothing is retried; one submit is one request.

pub mod client;
pub mod error;

pub use client::{interpret_response, HttpProvider};
pub use error::BridgeError;
