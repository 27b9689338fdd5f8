//! The closed set of operation kinds, with uniform dispatch.
//!
//! Every variant exposes the same four-part surface: `validate`,
//! `build_xdr`, `from_xdr`, and `source_account`. The sum type fans each
//! call out with an exhaustive match, so adding a variant is a compile
//! error until every path handles it.

use lumen_xdr::{self as xdr, OperationBody};

use crate::clawback_claimable_balance::ClawbackClaimableBalance;
use crate::create_account::CreateAccount;
use crate::error::Error;
use crate::manage_buy_offer::ManageBuyOffer;
use crate::manage_sell_offer::ManageSellOffer;
use crate::payment::Payment;

/// One typed ledger operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateAccount(CreateAccount),
    Payment(Payment),
    ManageSellOffer(ManageSellOffer),
    ManageBuyOffer(ManageBuyOffer),
    ClawbackClaimableBalance(ClawbackClaimableBalance),
}

impl Operation {
    /// Checks the operation's fields against what the ledger will accept.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Operation::CreateAccount(op) => op.validate(),
            Operation::Payment(op) => op.validate(),
            Operation::ManageSellOffer(op) => op.validate(),
            Operation::ManageBuyOffer(op) => op.validate(),
            Operation::ClawbackClaimableBalance(op) => op.validate(),
        }
    }

    /// Converts to the wire form. In muxed mode `M` addresses are carried
    /// through; in plain mode they are rejected.
    pub fn build_xdr(&self, muxed: bool) -> Result<xdr::Operation, Error> {
        match self {
            Operation::CreateAccount(op) => op.build_xdr(muxed),
            Operation::Payment(op) => op.build_xdr(muxed),
            Operation::ManageSellOffer(op) => op.build_xdr(muxed),
            Operation::ManageBuyOffer(op) => op.build_xdr(muxed),
            Operation::ClawbackClaimableBalance(op) => op.build_xdr(muxed),
        }
    }

    /// Reads a wire operation back into its typed form, selecting the
    /// variant by the wire body.
    pub fn from_xdr(op: &xdr::Operation, muxed: bool) -> Result<Self, Error> {
        match &op.body {
            OperationBody::CreateAccount(_) => {
                Ok(Operation::CreateAccount(CreateAccount::from_xdr(op, muxed)?))
            }
            OperationBody::Payment(_) => {
                Ok(Operation::Payment(Payment::from_xdr(op, muxed)?))
            }
            OperationBody::ManageSellOffer(_) => Ok(Operation::ManageSellOffer(
                ManageSellOffer::from_xdr(op, muxed)?,
            )),
            OperationBody::ManageBuyOffer(_) => Ok(Operation::ManageBuyOffer(
                ManageBuyOffer::from_xdr(op, muxed)?,
            )),
            OperationBody::ClawbackClaimableBalance(_) => {
                Ok(Operation::ClawbackClaimableBalance(
                    ClawbackClaimableBalance::from_xdr(op, muxed)?,
                ))
            }
        }
    }

    /// The operation-level source account; empty means inherited from the
    /// enclosing transaction.
    pub fn source_account(&self) -> &str {
        match self {
            Operation::CreateAccount(op) => op.source_account(),
            Operation::Payment(op) => op.source_account(),
            Operation::ManageSellOffer(op) => op.source_account(),
            Operation::ManageBuyOffer(op) => op.source_account(),
            Operation::ClawbackClaimableBalance(op) => op.source_account(),
        }
    }
}

impl From<CreateAccount> for Operation {
    fn from(op: CreateAccount) -> Self {
        Operation::CreateAccount(op)
    }
}

impl From<Payment> for Operation {
    fn from(op: Payment) -> Self {
        Operation::Payment(op)
    }
}

impl From<ManageSellOffer> for Operation {
    fn from(op: ManageSellOffer) -> Self {
        Operation::ManageSellOffer(op)
    }
}

impl From<ManageBuyOffer> for Operation {
    fn from(op: ManageBuyOffer) -> Self {
        Operation::ManageBuyOffer(op)
    }
}

impl From<ClawbackClaimableBalance> for Operation {
    fn from(op: ClawbackClaimableBalance) -> Self {
        Operation::ClawbackClaimableBalance(op)
    }
}
