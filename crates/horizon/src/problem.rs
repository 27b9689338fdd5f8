//! The problem document carried by error responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An RFC 7807 problem document. Everything the service wants to say beyond
/// the standard fields lands in `extras`; for failed submissions that is
/// where the envelope, the raw result, and the result codes live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: i32,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub extras: Map<String, Value>,
}

/// The `result_codes` extra of a failed submission: the transaction-level
/// code plus one code per operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionResultCodes {
    pub transaction: String,
    #[serde(default)]
    pub inner_transaction: String,
    #[serde(default)]
    pub operations: Vec<String>,
}
