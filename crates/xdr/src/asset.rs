//! Wire asset: the native asset, or a credit asset with a 4- or 12-byte
//! zero-padded code and an issuer account.

use crate::account::AccountId;
use crate::decoder::{DecodeError, XdrDecoder};
use crate::encoder::XdrEncoder;
use crate::XdrCodec;

const ASSET_TYPE_NATIVE: i32 = 0;
const ASSET_TYPE_CREDIT_ALPHANUM4: i32 = 1;
const ASSET_TYPE_CREDIT_ALPHANUM12: i32 = 2;

/// Asset wire variant. The code length selects the 4-byte or 12-byte arm;
/// the typed layer above owns that decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Native,
    CreditAlphanum4 { code: [u8; 4], issuer: AccountId },
    CreditAlphanum12 { code: [u8; 12], issuer: AccountId },
}

impl XdrCodec for Asset {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            Asset::Native => enc.write_int(ASSET_TYPE_NATIVE),
            Asset::CreditAlphanum4 { code, issuer } => {
                enc.write_int(ASSET_TYPE_CREDIT_ALPHANUM4);
                enc.write_opaque(code);
                issuer.encode(enc);
            }
            Asset::CreditAlphanum12 { code, issuer } => {
                enc.write_int(ASSET_TYPE_CREDIT_ALPHANUM12);
                enc.write_opaque(code);
                issuer.encode(enc);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            ASSET_TYPE_NATIVE => Ok(Asset::Native),
            ASSET_TYPE_CREDIT_ALPHANUM4 => {
                let code = dec.read_opaque_array::<4>()?;
                let issuer = AccountId::decode(dec)?;
                Ok(Asset::CreditAlphanum4 { code, issuer })
            }
            ASSET_TYPE_CREDIT_ALPHANUM12 => {
                let code = dec.read_opaque_array::<12>()?;
                let issuer = AccountId::decode(dec)?;
                Ok(Asset::CreditAlphanum12 { code, issuer })
            }
            other => Err(DecodeError::UnknownDiscriminant("asset type", other)),
        }
    }
}
