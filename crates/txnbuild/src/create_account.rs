//! Creates and funds a new ledger account.

use lumen_xdr::{self as xdr, OperationBody};

use crate::account;
use crate::amount;
use crate::error::Error;
use crate::validators;

/// Funds a new account at `destination` with `amount` of the native token.
/// The destination must be a plain `G` address; an account that does not
/// exist yet cannot be multiplexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAccount {
    pub destination: String,
    pub amount: String,
    pub source_account: String,
}

impl CreateAccount {
    pub fn validate(&self) -> Result<(), Error> {
        validators::validate_destination("Destination", &self.destination, false)?;
        validators::validate_amount("Amount", &self.amount)
    }

    pub fn build_xdr(&self, muxed: bool) -> Result<xdr::Operation, Error> {
        let destination = account::decode_account_id(&self.destination)
            .map_err(|e| Error::encoding("Destination", e))?;
        let starting_balance =
            amount::parse(&self.amount).map_err(|e| Error::encoding("Amount", e))?;
        let source_account = account::op_source(&self.source_account, muxed)
            .map_err(|e| Error::encoding("SourceAccount", e))?;
        Ok(xdr::Operation {
            source_account,
            body: OperationBody::CreateAccount(xdr::CreateAccountOp {
                destination,
                starting_balance,
            }),
        })
    }

    pub fn from_xdr(op: &xdr::Operation, muxed: bool) -> Result<Self, Error> {
        let OperationBody::CreateAccount(body) = &op.body else {
            return Err(Error::UnexpectedVariant);
        };
        Ok(CreateAccount {
            destination: account::encode_account_id(&body.destination),
            amount: amount::to_string(body.starting_balance),
            source_account: account::source_from_xdr(&op.source_account, muxed),
        })
    }

    pub fn source_account(&self) -> &str {
        &self.source_account
    }
}
