//! Structured decoding of error responses from the ledger query service.
//!
//! A rejected submission comes back as an RFC 7807 problem document whose
//! `extras` map carries the original transaction envelope, the raw result,
//! and the per-operation result codes. This crate models the document and
//! gives each extra a typed accessor.
//!
//! # Example
//!
//! ```
//! use lumen_horizon::{Error, ExtrasError, Problem};
//!
//! let problem: Problem = serde_json::from_str(
//!     r#"{
//!         "type": "https://lumen.network/errors/transaction_failed",
//!         "title": "Transaction Failed",
//!         "status": 400,
//!         "extras": {
//!             "result_codes": {
//!                 "transaction": "tx_failed",
//!                 "operations": ["op_underfunded"]
//!             }
//!         }
//!     }"#,
//! )
//! .unwrap();
//! let err = Error { problem };
//! assert_eq!(err.result_codes().unwrap().operations, ["op_underfunded"]);
//! assert!(matches!(
//!     err.envelope_xdr(),
//!     Err(ExtrasError::EnvelopeNotPopulated)
//! ));
//! ```

mod error;
mod problem;

pub use error::{Error, ExtrasError};
pub use problem::{Problem, TransactionResultCodes};
