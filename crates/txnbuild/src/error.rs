//! Operation-level error type.

use std::fmt::Display;

/// Error produced while validating, encoding, or decoding an operation.
/// Every variant names the field it concerns, so callers can surface
/// actionable messages without string matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("validation failed for field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("failed to encode field '{field}': {reason}")]
    Encoding { field: &'static str, reason: String },
    #[error("failed to decode field '{field}': {reason}")]
    Decoding { field: &'static str, reason: String },
    #[error("wire operation body does not match the expected operation type")]
    UnexpectedVariant,
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: impl Display) -> Self {
        Error::Validation {
            field,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encoding(field: &'static str, reason: impl Display) -> Self {
        Error::Encoding {
            field,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decoding(field: &'static str, reason: impl Display) -> Self {
        Error::Decoding {
            field,
            reason: reason.to_string(),
        }
    }
}
