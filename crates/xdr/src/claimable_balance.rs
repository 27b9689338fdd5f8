//! Wire claimable-balance identifier.

use crate::decoder::{DecodeError, XdrDecoder};
use crate::encoder::XdrEncoder;
use crate::XdrCodec;

const CLAIMABLE_BALANCE_ID_TYPE_V0: i32 = 0;

/// Identifier of a claimable balance entry. Callers usually carry it as the
/// hex encoding of the full wire value (discriminant plus 32-byte hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimableBalanceId {
    V0([u8; 32]),
}

impl XdrCodec for ClaimableBalanceId {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            ClaimableBalanceId::V0(hash) => {
                enc.write_int(CLAIMABLE_BALANCE_ID_TYPE_V0);
                enc.write_opaque(hash);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            CLAIMABLE_BALANCE_ID_TYPE_V0 => {
                Ok(ClaimableBalanceId::V0(dec.read_opaque_array::<32>()?))
            }
            other => Err(DecodeError::UnknownDiscriminant(
                "claimable balance id type",
                other,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal::{from_hex, to_hex};

    #[test]
    fn hex_form_is_72_chars() {
        let id = ClaimableBalanceId::V0([0xab; 32]);
        let hex = to_hex(&id);
        assert_eq!(hex.len(), 72);
        assert!(hex.starts_with("00000000"));
        assert_eq!(from_hex::<ClaimableBalanceId>(&hex).unwrap(), id);
    }

    #[test]
    fn unknown_version_rejected() {
        let err = from_hex::<ClaimableBalanceId>(&format!("00000001{}", "11".repeat(32)))
            .unwrap_err();
        assert_eq!(
            err,
            crate::MarshalError::Decode(DecodeError::UnknownDiscriminant(
                "claimable balance id type",
                1
            ))
        );
    }
}
