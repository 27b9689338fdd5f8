//! The transaction envelope, as far as the error-decoding read path needs
//! it: a v1 transaction with its operations and signatures.
//!
//! Transaction assembly and signing live outside this workspace; this type
//! exists so that an envelope embedded in an error response can be
//! reconstructed and inspected.

use crate::account::MuxedAccount;
use crate::decoder::{DecodeError, XdrDecoder};
use crate::encoder::XdrEncoder;
use crate::operation::Operation;
use crate::XdrCodec;

const ENVELOPE_TYPE_TX_V0: i32 = 0;
const ENVELOPE_TYPE_TX: i32 = 2;
const ENVELOPE_TYPE_TX_FEE_BUMP: i32 = 5;

const MAX_OPS_PER_TX: u32 = 100;
const MAX_SIGNATURES: u32 = 20;
const MAX_MEMO_TEXT: u32 = 28;
const MAX_SIGNATURE_BYTES: u32 = 64;

/// Validity window for a transaction, in epoch seconds. Zero max means no
/// upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

impl XdrCodec for TimeBounds {
    fn encode(&self, enc: &mut XdrEncoder) {
        enc.write_unsigned_hyper(self.min_time);
        enc.write_unsigned_hyper(self.max_time);
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(TimeBounds {
            min_time: dec.read_unsigned_hyper()?,
            max_time: dec.read_unsigned_hyper()?,
        })
    }
}

/// Transaction preconditions. Only the classic forms are carried; the
/// extended v2 precondition set is reported as unsupported on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preconditions {
    None,
    Time(TimeBounds),
}

impl XdrCodec for Preconditions {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            Preconditions::None => enc.write_int(0),
            Preconditions::Time(tb) => {
                enc.write_int(1);
                tb.encode(enc);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            0 => Ok(Preconditions::None),
            1 => Ok(Preconditions::Time(TimeBounds::decode(dec)?)),
            2 => Err(DecodeError::Unsupported("v2 preconditions")),
            other => Err(DecodeError::UnknownDiscriminant("precondition type", other)),
        }
    }
}

/// Transaction memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Memo {
    None,
    Text(String),
    Id(u64),
    Hash([u8; 32]),
    Return([u8; 32]),
}

impl XdrCodec for Memo {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            Memo::None => enc.write_int(0),
            Memo::Text(text) => {
                enc.write_int(1);
                enc.write_string(text);
            }
            Memo::Id(id) => {
                enc.write_int(2);
                enc.write_unsigned_hyper(*id);
            }
            Memo::Hash(hash) => {
                enc.write_int(3);
                enc.write_opaque(hash);
            }
            Memo::Return(hash) => {
                enc.write_int(4);
                enc.write_opaque(hash);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            0 => Ok(Memo::None),
            1 => Ok(Memo::Text(dec.read_string(Some(MAX_MEMO_TEXT))?)),
            2 => Ok(Memo::Id(dec.read_unsigned_hyper()?)),
            3 => Ok(Memo::Hash(dec.read_opaque_array::<32>()?)),
            4 => Ok(Memo::Return(dec.read_opaque_array::<32>()?)),
            other => Err(DecodeError::UnknownDiscriminant("memo type", other)),
        }
    }
}

/// The v1 transaction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub source_account: MuxedAccount,
    pub fee: u32,
    pub seq_num: i64,
    pub cond: Preconditions,
    pub memo: Memo,
    pub operations: Vec<Operation>,
}

impl XdrCodec for Transaction {
    fn encode(&self, enc: &mut XdrEncoder) {
        self.source_account.encode(enc);
        enc.write_unsigned_int(self.fee);
        enc.write_hyper(self.seq_num);
        self.cond.encode(enc);
        self.memo.encode(enc);
        enc.write_unsigned_int(self.operations.len() as u32);
        for op in &self.operations {
            op.encode(enc);
        }
        // reserved extension union, always arm 0
        enc.write_int(0);
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        let source_account = MuxedAccount::decode(dec)?;
        let fee = dec.read_unsigned_int()?;
        let seq_num = dec.read_hyper()?;
        let cond = Preconditions::decode(dec)?;
        let memo = Memo::decode(dec)?;
        let count = dec.read_unsigned_int()?;
        if count > MAX_OPS_PER_TX {
            return Err(DecodeError::MaxSizeExceeded);
        }
        let mut operations = Vec::with_capacity(count as usize);
        for _ in 0..count {
            operations.push(Operation::decode(dec)?);
        }
        match dec.read_int()? {
            0 => {}
            other => return Err(DecodeError::UnknownDiscriminant("transaction ext", other)),
        }
        Ok(Transaction {
            source_account,
            fee,
            seq_num,
            cond,
            memo,
            operations,
        })
    }
}

/// A signature together with the hint identifying the signing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

impl XdrCodec for DecoratedSignature {
    fn encode(&self, enc: &mut XdrEncoder) {
        enc.write_opaque(&self.hint);
        enc.write_varlen_opaque(&self.signature);
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(DecoratedSignature {
            hint: dec.read_opaque_array::<4>()?,
            signature: dec.read_varlen_opaque(Some(MAX_SIGNATURE_BYTES))?,
        })
    }
}

/// A v1 transaction with its signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionV1Envelope {
    pub tx: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl XdrCodec for TransactionV1Envelope {
    fn encode(&self, enc: &mut XdrEncoder) {
        self.tx.encode(enc);
        enc.write_unsigned_int(self.signatures.len() as u32);
        for sig in &self.signatures {
            sig.encode(enc);
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        let tx = Transaction::decode(dec)?;
        let count = dec.read_unsigned_int()?;
        if count > MAX_SIGNATURES {
            return Err(DecodeError::MaxSizeExceeded);
        }
        let mut signatures = Vec::with_capacity(count as usize);
        for _ in 0..count {
            signatures.push(DecoratedSignature::decode(dec)?);
        }
        Ok(TransactionV1Envelope { tx, signatures })
    }
}

/// The outer envelope union. Legacy v0 and fee-bump envelopes are reported
/// as unsupported rather than silently misread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionEnvelope {
    TxV1(TransactionV1Envelope),
}

impl XdrCodec for TransactionEnvelope {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            TransactionEnvelope::TxV1(env) => {
                enc.write_int(ENVELOPE_TYPE_TX);
                env.encode(enc);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            ENVELOPE_TYPE_TX => Ok(TransactionEnvelope::TxV1(TransactionV1Envelope::decode(
                dec,
            )?)),
            ENVELOPE_TYPE_TX_V0 => Err(DecodeError::Unsupported("v0 transaction envelope")),
            ENVELOPE_TYPE_TX_FEE_BUMP => Err(DecodeError::Unsupported("fee-bump envelope")),
            other => Err(DecodeError::UnknownDiscriminant("envelope type", other)),
        }
    }
}
