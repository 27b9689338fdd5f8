//! Address strings to wire account references.
//!
//! Every mapping here is parameterized by an explicit muxed-mode flag: in
//! plain mode only `G` addresses are accepted and multiplexed wire accounts
//! render as their underlying `G` address; in muxed mode `M` addresses pass
//! through with their sub-account id intact.

use lumen_strkey as strkey;
use lumen_xdr::{AccountId, MuxedAccount};

/// Address decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error(transparent)]
    Strkey(#[from] strkey::StrkeyError),
    #[error("multiplexed addresses are not accepted here")]
    MuxedNotAllowed,
}

/// Decodes an address into a wire account reference.
pub fn decode_address(address: &str, muxed: bool) -> Result<MuxedAccount, AddressError> {
    if address.starts_with('M') {
        if !muxed {
            return Err(AddressError::MuxedNotAllowed);
        }
        let (key, id) = strkey::decode_muxed_account(address)?;
        return Ok(MuxedAccount::MuxedEd25519 { id, ed25519: key });
    }
    let key = strkey::decode_ed25519_public_key(address)?;
    Ok(MuxedAccount::Ed25519(key))
}

/// Decodes a plain `G` address into a wire account id.
pub fn decode_account_id(address: &str) -> Result<AccountId, AddressError> {
    Ok(AccountId::Ed25519(strkey::decode_ed25519_public_key(
        address,
    )?))
}

/// Renders a wire account reference back to its address string.
pub fn encode_address(account: &MuxedAccount, muxed: bool) -> String {
    match account {
        MuxedAccount::Ed25519(key) => strkey::encode_ed25519_public_key(key),
        MuxedAccount::MuxedEd25519 { id, ed25519 } if muxed => {
            strkey::encode_muxed_account(ed25519, *id)
        }
        MuxedAccount::MuxedEd25519 { ed25519, .. } => {
            strkey::encode_ed25519_public_key(ed25519)
        }
    }
}

/// Renders a wire account id as its `G` address.
pub fn encode_account_id(account: &AccountId) -> String {
    strkey::encode_ed25519_public_key(account.ed25519())
}

/// Builds the optional source-account field of an operation envelope.
/// An empty address means "inherit from the enclosing transaction".
pub(crate) fn op_source(
    address: &str,
    muxed: bool,
) -> Result<Option<MuxedAccount>, AddressError> {
    if address.is_empty() {
        return Ok(None);
    }
    Ok(Some(decode_address(address, muxed)?))
}

/// Reads the optional source-account field back to a string; absent maps to
/// the empty string.
pub(crate) fn source_from_xdr(source: &Option<MuxedAccount>, muxed: bool) -> String {
    source
        .as_ref()
        .map(|account| encode_address(account, muxed))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

    #[test]
    fn plain_address_roundtrip() {
        let account = decode_address(ISSUER, false).unwrap();
        assert!(matches!(account, MuxedAccount::Ed25519(_)));
        assert_eq!(encode_address(&account, false), ISSUER);
        assert_eq!(encode_address(&account, true), ISSUER);
    }

    #[test]
    fn muxed_address_roundtrip_preserves_id() {
        let key = *decode_account_id(ISSUER).unwrap().ed25519();
        let muxed = strkey::encode_muxed_account(&key, 1234);
        let account = decode_address(&muxed, true).unwrap();
        assert_eq!(
            account,
            MuxedAccount::MuxedEd25519 {
                id: 1234,
                ed25519: key
            }
        );
        assert_eq!(encode_address(&account, true), muxed);
    }

    #[test]
    fn plain_mode_rejects_muxed_addresses() {
        let key = *decode_account_id(ISSUER).unwrap().ed25519();
        let muxed = strkey::encode_muxed_account(&key, 7);
        assert_eq!(
            decode_address(&muxed, false).unwrap_err(),
            AddressError::MuxedNotAllowed
        );
    }

    #[test]
    fn plain_mode_flattens_muxed_wire_accounts() {
        let key = *decode_account_id(ISSUER).unwrap().ed25519();
        let account = MuxedAccount::MuxedEd25519 {
            id: 99,
            ed25519: key,
        };
        assert_eq!(encode_address(&account, false), ISSUER);
    }

    #[test]
    fn empty_source_means_inherited() {
        assert_eq!(op_source("", true).unwrap(), None);
        assert_eq!(source_from_xdr(&None, true), "");
    }
}
