//! Nullable infrastructure for deterministic testing.
//!
//! Inspired by the "A-frame architecture" pattern from RsNano.
//! The external verification operation is abstracted behind
//! `VerificationProvider`, and wall-clock time sits behind [`NullClock`] in tests.
//! The provider nullable:
//! - Returns scripted outcomes
//! - Records every request it receives
//! - Can hold a call open until the test releases it
//! - Never touches the network
//!
//! Usage: swap the real provider for a nullable in tests.

pub mod clock;
pub mod provider;

pub use clock::NullClock;
pub use provider::{Gate, NullProvider};
