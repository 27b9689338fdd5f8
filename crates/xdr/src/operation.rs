//! The operation wire envelope: an optional source account plus a
//! discriminant-tagged body.
//!
//! The discriminant and the body type always agree by construction; decode
//! rejects unknown discriminants before reading any body bytes.

use crate::account::{AccountId, MuxedAccount};
use crate::asset::Asset;
use crate::claimable_balance::ClaimableBalanceId;
use crate::decoder::{DecodeError, XdrDecoder};
use crate::encoder::XdrEncoder;
use crate::price::Price;
use crate::XdrCodec;

/// Operation type discriminants, as declared by the protocol schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OperationType {
    CreateAccount = 0,
    Payment = 1,
    ManageSellOffer = 3,
    ManageBuyOffer = 12,
    ClawbackClaimableBalance = 20,
}

/// Funds a new account with a starting balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

/// Sends an amount of an asset to a destination account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    pub amount: i64,
}

/// Creates, updates, or deletes a sell offer on the order book.
/// Offer id zero creates; amount zero deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

/// Creates, updates, or deletes a buy offer on the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManageBuyOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

/// Claws back an unclaimed claimable balance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClawbackClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

/// The body union of the operation envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    ManageSellOffer(ManageSellOfferOp),
    ManageBuyOffer(ManageBuyOfferOp),
    ClawbackClaimableBalance(ClawbackClaimableBalanceOp),
}

impl OperationBody {
    pub fn op_type(&self) -> OperationType {
        match self {
            OperationBody::CreateAccount(_) => OperationType::CreateAccount,
            OperationBody::Payment(_) => OperationType::Payment,
            OperationBody::ManageSellOffer(_) => OperationType::ManageSellOffer,
            OperationBody::ManageBuyOffer(_) => OperationType::ManageBuyOffer,
            OperationBody::ClawbackClaimableBalance(_) => {
                OperationType::ClawbackClaimableBalance
            }
        }
    }
}

impl XdrCodec for OperationBody {
    fn encode(&self, enc: &mut XdrEncoder) {
        enc.write_int(self.op_type() as i32);
        match self {
            OperationBody::CreateAccount(op) => {
                op.destination.encode(enc);
                enc.write_hyper(op.starting_balance);
            }
            OperationBody::Payment(op) => {
                op.destination.encode(enc);
                op.asset.encode(enc);
                enc.write_hyper(op.amount);
            }
            OperationBody::ManageSellOffer(op) => {
                op.selling.encode(enc);
                op.buying.encode(enc);
                enc.write_hyper(op.amount);
                op.price.encode(enc);
                enc.write_hyper(op.offer_id);
            }
            OperationBody::ManageBuyOffer(op) => {
                op.selling.encode(enc);
                op.buying.encode(enc);
                enc.write_hyper(op.buy_amount);
                op.price.encode(enc);
                enc.write_hyper(op.offer_id);
            }
            OperationBody::ClawbackClaimableBalance(op) => {
                op.balance_id.encode(enc);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            0 => Ok(OperationBody::CreateAccount(CreateAccountOp {
                destination: AccountId::decode(dec)?,
                starting_balance: dec.read_hyper()?,
            })),
            1 => Ok(OperationBody::Payment(PaymentOp {
                destination: MuxedAccount::decode(dec)?,
                asset: Asset::decode(dec)?,
                amount: dec.read_hyper()?,
            })),
            3 => Ok(OperationBody::ManageSellOffer(ManageSellOfferOp {
                selling: Asset::decode(dec)?,
                buying: Asset::decode(dec)?,
                amount: dec.read_hyper()?,
                price: Price::decode(dec)?,
                offer_id: dec.read_hyper()?,
            })),
            12 => Ok(OperationBody::ManageBuyOffer(ManageBuyOfferOp {
                selling: Asset::decode(dec)?,
                buying: Asset::decode(dec)?,
                buy_amount: dec.read_hyper()?,
                price: Price::decode(dec)?,
                offer_id: dec.read_hyper()?,
            })),
            20 => Ok(OperationBody::ClawbackClaimableBalance(
                ClawbackClaimableBalanceOp {
                    balance_id: ClaimableBalanceId::decode(dec)?,
                },
            )),
            other => Err(DecodeError::UnknownDiscriminant("operation type", other)),
        }
    }
}

/// One ledger-mutating instruction, as carried inside a transaction.
///
/// An absent source account means "inherit from the enclosing transaction".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

impl XdrCodec for Operation {
    fn encode(&self, enc: &mut XdrEncoder) {
        match &self.source_account {
            Some(acc) => {
                enc.write_bool(true);
                acc.encode(enc);
            }
            None => enc.write_bool(false),
        }
        self.body.encode(enc);
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        let source_account = if dec.read_bool()? {
            Some(MuxedAccount::decode(dec)?)
        } else {
            None
        };
        let body = OperationBody::decode(dec)?;
        Ok(Operation {
            source_account,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer() -> Operation {
        Operation {
            source_account: None,
            body: OperationBody::ManageSellOffer(ManageSellOfferOp {
                selling: Asset::Native,
                buying: Asset::CreditAlphanum4 {
                    code: *b"USD\0",
                    issuer: AccountId::Ed25519([1u8; 32]),
                },
                amount: 1_000_000_000,
                price: Price { n: 3, d: 2 },
                offer_id: 0,
            }),
        }
    }

    #[test]
    fn discriminant_leads_the_body() {
        let op = sample_offer();
        let bytes = op.to_bytes();
        // optional source (absent) then operation type 3
        assert_eq!(&bytes[..8], [0, 0, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn roundtrip_all_variants() {
        let ops = [
            OperationBody::CreateAccount(CreateAccountOp {
                destination: AccountId::Ed25519([4u8; 32]),
                starting_balance: 25_000_000,
            }),
            OperationBody::Payment(PaymentOp {
                destination: MuxedAccount::MuxedEd25519 {
                    id: 42,
                    ed25519: [5u8; 32],
                },
                asset: Asset::Native,
                amount: 7,
            }),
            sample_offer().body,
            OperationBody::ManageBuyOffer(ManageBuyOfferOp {
                selling: Asset::Native,
                buying: Asset::CreditAlphanum12 {
                    code: *b"DEADBEEF\0\0\0\0",
                    issuer: AccountId::Ed25519([6u8; 32]),
                },
                buy_amount: 10,
                price: Price { n: 1, d: 1 },
                offer_id: 9,
            }),
            OperationBody::ClawbackClaimableBalance(ClawbackClaimableBalanceOp {
                balance_id: ClaimableBalanceId::V0([0xcd; 32]),
            }),
        ];
        for body in ops {
            for source_account in [None, Some(MuxedAccount::Ed25519([8u8; 32]))] {
                let op = Operation {
                    source_account,
                    body,
                };
                assert_eq!(Operation::from_bytes(&op.to_bytes()).unwrap(), op);
            }
        }
    }

    #[test]
    fn unknown_operation_type_rejected() {
        // absent source, then discriminant 99
        let bytes = [0, 0, 0, 0, 0, 0, 0, 99];
        assert_eq!(
            Operation::from_bytes(&bytes).unwrap_err(),
            DecodeError::UnknownDiscriminant("operation type", 99)
        );
    }
}
