//! The service error type and its typed extras accessors.

use std::fmt;

use lumen_xdr::{from_base64, MarshalError, TransactionEnvelope};
use serde_json::Value;

use crate::problem::{Problem, TransactionResultCodes};

/// An error response from the query service.
///
/// The interesting payloads hide in the problem's `extras` map; the
/// accessor methods pull them out with distinct errors for each absent
/// field, so callers can tell "the service did not include it" apart from
/// "it was included but unreadable".
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub problem: Problem,
}

/// Failure to extract a typed payload from the `extras` map.
#[derive(Debug, thiserror::Error)]
pub enum ExtrasError {
    #[error("envelope not found in the response extras")]
    EnvelopeNotPopulated,
    #[error("result not found in the response extras")]
    ResultNotPopulated,
    #[error("result codes not found in the response extras")]
    ResultCodesNotPopulated,
    #[error("extras field '{0}' has an unexpected shape")]
    Malformed(&'static str),
    #[error(transparent)]
    Xdr(#[from] MarshalError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The base64 envelope of the rejected transaction, verbatim.
    pub fn envelope_xdr(&self) -> Result<&str, ExtrasError> {
        match self.problem.extras.get("envelope_xdr") {
            None => Err(ExtrasError::EnvelopeNotPopulated),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ExtrasError::Malformed("envelope_xdr")),
        }
    }

    /// The rejected transaction, decoded back to its wire structure.
    pub fn envelope(&self) -> Result<TransactionEnvelope, ExtrasError> {
        Ok(from_base64(self.envelope_xdr()?)?)
    }

    /// The base64 result of the rejected transaction, verbatim.
    pub fn result_string(&self) -> Result<&str, ExtrasError> {
        match self.problem.extras.get("result_xdr") {
            None => Err(ExtrasError::ResultNotPopulated),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ExtrasError::Malformed("result_xdr")),
        }
    }

    /// The transaction and per-operation result codes.
    pub fn result_codes(&self) -> Result<TransactionResultCodes, ExtrasError> {
        let value = self
            .problem
            .extras
            .get("result_codes")
            .ok_or(ExtrasError::ResultCodesNotPopulated)?;
        Ok(serde_json::from_value(value.clone())?)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horizon error: \"{}\" ", self.problem.title)?;
        if let Ok(codes) = self.result_codes() {
            // transaction-level code first, then one code per operation
            let mut all = Vec::with_capacity(1 + codes.operations.len());
            all.push(codes.transaction);
            all.extend(codes.operations);
            write!(f, "({}) ", all.join(", "))?;
        }
        f.write_str("- check the problem field for more information")
    }
}

impl std::error::Error for Error {}
