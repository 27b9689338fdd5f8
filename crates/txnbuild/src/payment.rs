//! Sends an amount of an asset to another account.

use lumen_xdr::{self as xdr, OperationBody};

use crate::account;
use crate::amount;
use crate::asset::Asset;
use crate::error::Error;
use crate::validators;

/// Pays `amount` of `asset` to `destination`. The destination may be a
/// multiplexed `M` address when the operation is built in muxed mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payment {
    pub destination: String,
    pub amount: String,
    pub asset: Asset,
    pub source_account: String,
}

impl Payment {
    pub fn validate(&self) -> Result<(), Error> {
        validators::validate_destination("Destination", &self.destination, true)?;
        validators::validate_asset("Asset", &self.asset)?;
        validators::validate_amount("Amount", &self.amount)
    }

    pub fn build_xdr(&self, muxed: bool) -> Result<xdr::Operation, Error> {
        let destination = account::decode_address(&self.destination, muxed)
            .map_err(|e| Error::encoding("Destination", e))?;
        let asset = self
            .asset
            .to_xdr()
            .map_err(|e| Error::encoding("Asset", e))?;
        let amount = amount::parse(&self.amount).map_err(|e| Error::encoding("Amount", e))?;
        let source_account = account::op_source(&self.source_account, muxed)
            .map_err(|e| Error::encoding("SourceAccount", e))?;
        Ok(xdr::Operation {
            source_account,
            body: OperationBody::Payment(xdr::PaymentOp {
                destination,
                asset,
                amount,
            }),
        })
    }

    pub fn from_xdr(op: &xdr::Operation, muxed: bool) -> Result<Self, Error> {
        let OperationBody::Payment(body) = &op.body else {
            return Err(Error::UnexpectedVariant);
        };
        Ok(Payment {
            destination: account::encode_address(&body.destination, muxed),
            amount: amount::to_string(body.amount),
            asset: Asset::from_xdr(&body.asset).map_err(|e| Error::decoding("Asset", e))?,
            source_account: account::source_from_xdr(&op.source_account, muxed),
        })
    }

    pub fn source_account(&self) -> &str {
        &self.source_account
    }
}
