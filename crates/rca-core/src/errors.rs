//! Cross-cutting error types for the RCA assistant.
//!
//! Configuration errors live in `rca-config`. The binary converges everything
//! into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any `rca` crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name a known enum variant.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
