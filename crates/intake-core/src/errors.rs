//! Error types for intake input handling.
//!
//! Field-level validation failures are not errors in this sense; they are
//! reported through [`crate::ValidationErrors`]. `CoreError` covers documents
//! that cannot be read as an onboarding input at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a member of the service enumeration.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// The document was not a JSON object.
    #[error("Malformed onboarding input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}
