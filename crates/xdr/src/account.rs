//! Wire account identifiers: plain ed25519-keyed accounts and multiplexed
//! accounts carrying a 64-bit sub-account id.

use crate::decoder::{DecodeError, XdrDecoder};
use crate::encoder::XdrEncoder;
use crate::XdrCodec;

const KEY_TYPE_ED25519: i32 = 0;
const KEY_TYPE_MUXED_ED25519: i32 = 0x100;

/// A plain account identifier (public-key union with a single arm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountId {
    Ed25519([u8; 32]),
}

impl AccountId {
    pub fn ed25519(&self) -> &[u8; 32] {
        match self {
            AccountId::Ed25519(key) => key,
        }
    }
}

impl XdrCodec for AccountId {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            AccountId::Ed25519(key) => {
                enc.write_int(KEY_TYPE_ED25519);
                enc.write_opaque(key);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            KEY_TYPE_ED25519 => Ok(AccountId::Ed25519(dec.read_opaque_array::<32>()?)),
            other => Err(DecodeError::UnknownDiscriminant("public key type", other)),
        }
    }
}

/// An account reference in an operation or transaction: either a plain
/// ed25519 key or a multiplexed form that adds a sub-account id.
///
/// In the multiplexed arm the id precedes the key on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxedAccount {
    Ed25519([u8; 32]),
    MuxedEd25519 { id: u64, ed25519: [u8; 32] },
}

impl MuxedAccount {
    pub fn ed25519(&self) -> &[u8; 32] {
        match self {
            MuxedAccount::Ed25519(key) => key,
            MuxedAccount::MuxedEd25519 { ed25519, .. } => ed25519,
        }
    }

    /// Drops the sub-account id, if any.
    pub fn to_account_id(&self) -> AccountId {
        AccountId::Ed25519(*self.ed25519())
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(id: AccountId) -> Self {
        MuxedAccount::Ed25519(*id.ed25519())
    }
}

impl XdrCodec for MuxedAccount {
    fn encode(&self, enc: &mut XdrEncoder) {
        match self {
            MuxedAccount::Ed25519(key) => {
                enc.write_int(KEY_TYPE_ED25519);
                enc.write_opaque(key);
            }
            MuxedAccount::MuxedEd25519 { id, ed25519 } => {
                enc.write_int(KEY_TYPE_MUXED_ED25519);
                enc.write_unsigned_hyper(*id);
                enc.write_opaque(ed25519);
            }
        }
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        match dec.read_int()? {
            KEY_TYPE_ED25519 => Ok(MuxedAccount::Ed25519(dec.read_opaque_array::<32>()?)),
            KEY_TYPE_MUXED_ED25519 => {
                let id = dec.read_unsigned_hyper()?;
                let ed25519 = dec.read_opaque_array::<32>()?;
                Ok(MuxedAccount::MuxedEd25519 { id, ed25519 })
            }
            other => Err(DecodeError::UnknownDiscriminant("crypto key type", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_layout() {
        let bytes = AccountId::Ed25519([7u8; 32]).to_bytes();
        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[..4], [0, 0, 0, 0]);
        assert_eq!(&bytes[4..], [7u8; 32]);
    }

    #[test]
    fn muxed_layout_has_id_before_key() {
        let bytes = MuxedAccount::MuxedEd25519 {
            id: 1,
            ed25519: [9u8; 32],
        }
        .to_bytes();
        assert_eq!(bytes.len(), 44);
        assert_eq!(&bytes[..4], [0, 0, 1, 0]); // discriminant 0x100
        assert_eq!(&bytes[4..12], [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&bytes[12..], [9u8; 32]);
    }

    #[test]
    fn roundtrip_both_arms() {
        for acc in [
            MuxedAccount::Ed25519([1u8; 32]),
            MuxedAccount::MuxedEd25519 {
                id: u64::MAX,
                ed25519: [2u8; 32],
            },
        ] {
            assert_eq!(MuxedAccount::from_bytes(&acc.to_bytes()).unwrap(), acc);
        }
    }

    #[test]
    fn unknown_key_type_rejected() {
        let mut bytes = MuxedAccount::Ed25519([0u8; 32]).to_bytes();
        bytes[3] = 9;
        assert_eq!(
            MuxedAccount::from_bytes(&bytes).unwrap_err(),
            DecodeError::UnknownDiscriminant("crypto key type", 9)
        );
    }

    #[test]
    fn to_account_id_drops_mux() {
        let muxed = MuxedAccount::MuxedEd25519 {
            id: 5,
            ed25519: [3u8; 32],
        };
        assert_eq!(muxed.to_account_id(), AccountId::Ed25519([3u8; 32]));
    }
}
