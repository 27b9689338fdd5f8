//! Canonical XDR wire encoding for ledger transactions and operations.
//!
//! This crate owns the bit-exact binary layout consumed by the network:
//! big-endian fixed-width integers, discriminant-tagged unions, and fixed-
//! or length-prefixed arrays, per RFC 4506. The typed builder layer sits
//! above it and never touches raw bytes directly.
//!
//! Everything here is a pure computation over caller-owned values; encoding
//! and decoding distinct values from multiple threads needs no coordination.
//!
//! # Example
//!
//! ```
//! use lumen_xdr::{from_base64, to_base64, Price};
//!
//! let price = Price { n: 3, d: 2 };
//! let b64 = to_base64(&price);
//! assert_eq!(from_base64::<Price>(&b64).unwrap(), price);
//! ```

mod decoder;
mod encoder;
mod marshal;

pub mod account;
pub mod asset;
pub mod claimable_balance;
pub mod operation;
pub mod price;
pub mod transaction;

pub use account::{AccountId, MuxedAccount};
pub use asset::Asset;
pub use claimable_balance::ClaimableBalanceId;
pub use decoder::{DecodeError, XdrDecoder};
pub use encoder::XdrEncoder;
pub use marshal::{from_base64, from_hex, to_base64, to_hex, MarshalError};
pub use operation::{
    ClawbackClaimableBalanceOp, CreateAccountOp, ManageBuyOfferOp, ManageSellOfferOp, Operation,
    OperationBody, OperationType, PaymentOp,
};
pub use price::Price;
pub use transaction::{
    DecoratedSignature, Memo, Preconditions, TimeBounds, Transaction, TransactionEnvelope,
    TransactionV1Envelope,
};

/// A value with a canonical XDR representation.
///
/// Encoding is infallible: every inhabitant of an implementing type is a
/// valid wire value by construction. Decoding validates discriminants and
/// size bounds as it goes.
pub trait XdrCodec: Sized {
    fn encode(&self, enc: &mut XdrEncoder);
    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError>;

    /// Encodes the value to a standalone byte vector.
    fn to_bytes(&self) -> Vec<u8> {
        let mut enc = XdrEncoder::new();
        self.encode(&mut enc);
        enc.into_bytes()
    }

    /// Decodes a value that must consume the whole input.
    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let mut dec = XdrDecoder::new(data);
        let value = Self::decode(&mut dec)?;
        dec.finish()?;
        Ok(value)
    }
}
