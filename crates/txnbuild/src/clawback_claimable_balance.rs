//! Claws back an unclaimed claimable balance entry.

use lumen_xdr::{self as xdr, from_hex, to_hex, ClaimableBalanceId, OperationBody};

use crate::account;
use crate::error::Error;

/// Removes a claimable balance, returning the held amount to the issuer.
/// The balance id is carried as the hex encoding of the full wire
/// identifier (72 characters for the v0 form).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClawbackClaimableBalance {
    pub balance_id: String,
    pub source_account: String,
}

impl ClawbackClaimableBalance {
    pub fn validate(&self) -> Result<(), Error> {
        from_hex::<ClaimableBalanceId>(&self.balance_id)
            .map(|_| ())
            .map_err(|e| Error::validation("BalanceID", e))
    }

    pub fn build_xdr(&self, muxed: bool) -> Result<xdr::Operation, Error> {
        let balance_id = from_hex::<ClaimableBalanceId>(&self.balance_id)
            .map_err(|e| Error::encoding("BalanceID", e))?;
        let source_account = account::op_source(&self.source_account, muxed)
            .map_err(|e| Error::encoding("SourceAccount", e))?;
        Ok(xdr::Operation {
            source_account,
            body: OperationBody::ClawbackClaimableBalance(xdr::ClawbackClaimableBalanceOp {
                balance_id,
            }),
        })
    }

    pub fn from_xdr(op: &xdr::Operation, muxed: bool) -> Result<Self, Error> {
        let OperationBody::ClawbackClaimableBalance(body) = &op.body else {
            return Err(Error::UnexpectedVariant);
        };
        Ok(ClawbackClaimableBalance {
            balance_id: to_hex(&body.balance_id),
            source_account: account::source_from_xdr(&op.source_account, muxed),
        })
    }

    pub fn source_account(&self) -> &str {
        &self.source_account
    }
}
