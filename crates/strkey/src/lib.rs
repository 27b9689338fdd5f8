//! Checksum-protected base32 encoding for ledger account keys ("strkey").
//!
//! A strkey is a version byte, a payload, and a 16-bit checksum, encoded
//! together as unpadded base32. The version byte selects the key kind and
//! determines the leading character of the encoded form: account ids start
//! with `G`, multiplexed account ids with `M`, seeds with `S`.
//!
//! Multiplexed accounts carry the 32-byte ed25519 key followed by a
//! big-endian 64-bit sub-account id.
//!
//! The seed form belongs to the same address family and shares the codec
//! wholesale, so it is part of this crate's surface even though nothing
//! above the address layer consumes seeds: wallets hold them, and the
//! version-byte check is what keeps a pasted seed from ever being read as
//! an account id.
//!
//! # Example
//!
//! ```
//! use lumen_strkey::{decode_ed25519_public_key, encode_ed25519_public_key};
//!
//! let key = [7u8; 32];
//! let address = encode_ed25519_public_key(&key);
//! assert!(address.starts_with('G'));
//! assert_eq!(decode_ed25519_public_key(&address).unwrap(), key);
//! ```

mod base32;
mod crc16;

/// Version byte tags for the supported key kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VersionByte {
    /// Account id, renders with a leading `G`.
    AccountId = 6 << 3,
    /// Multiplexed account id, renders with a leading `M`.
    MuxedAccount = 12 << 3,
    /// Secret seed, renders with a leading `S`.
    Seed = 18 << 3,
}

impl VersionByte {
    fn from_u8(b: u8) -> Option<Self> {
        match b {
            48 => Some(VersionByte::AccountId),
            96 => Some(VersionByte::MuxedAccount),
            144 => Some(VersionByte::Seed),
            _ => None,
        }
    }
}

/// Strkey decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrkeyError {
    #[error("invalid base32 character in key")]
    InvalidCharacter,
    #[error("key is not canonical base32")]
    NonCanonical,
    #[error("key has an invalid length")]
    InvalidLength,
    #[error("key checksum does not match")]
    InvalidChecksum,
    #[error("unexpected key version byte: {0}")]
    UnexpectedVersion(u8),
}

/// Encodes a payload under the given version byte.
pub fn encode(version: VersionByte, payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(payload.len() + 3);
    raw.push(version as u8);
    raw.extend_from_slice(payload);
    let checksum = crc16::checksum(&raw);
    raw.extend_from_slice(&checksum.to_le_bytes());
    base32::encode(&raw)
}

/// Decodes a strkey, verifying the checksum and the expected version byte.
/// Returns the raw payload.
pub fn decode(expected: VersionByte, s: &str) -> Result<Vec<u8>, StrkeyError> {
    let raw = base32::decode(s)?;
    if raw.len() < 3 {
        return Err(StrkeyError::InvalidLength);
    }
    let (body, checksum_bytes) = raw.split_at(raw.len() - 2);
    let expected_checksum = u16::from_le_bytes([checksum_bytes[0], checksum_bytes[1]]);
    if crc16::checksum(body) != expected_checksum {
        return Err(StrkeyError::InvalidChecksum);
    }
    if body[0] != expected as u8 {
        return Err(StrkeyError::UnexpectedVersion(body[0]));
    }
    Ok(body[1..].to_vec())
}

/// Encodes a 32-byte ed25519 public key as a `G` address.
pub fn encode_ed25519_public_key(key: &[u8; 32]) -> String {
    encode(VersionByte::AccountId, key)
}

/// Decodes a `G` address into its 32-byte ed25519 public key.
pub fn decode_ed25519_public_key(s: &str) -> Result<[u8; 32], StrkeyError> {
    let payload = decode(VersionByte::AccountId, s)?;
    payload.try_into().map_err(|_| StrkeyError::InvalidLength)
}

/// Encodes an ed25519 public key plus a 64-bit sub-account id as an `M`
/// address.
pub fn encode_muxed_account(ed25519: &[u8; 32], id: u64) -> String {
    let mut payload = [0u8; 40];
    payload[..32].copy_from_slice(ed25519);
    payload[32..].copy_from_slice(&id.to_be_bytes());
    encode(VersionByte::MuxedAccount, &payload)
}

/// Decodes an `M` address into its ed25519 public key and sub-account id.
pub fn decode_muxed_account(s: &str) -> Result<([u8; 32], u64), StrkeyError> {
    let payload = decode(VersionByte::MuxedAccount, s)?;
    if payload.len() != 40 {
        return Err(StrkeyError::InvalidLength);
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&payload[..32]);
    let mut id_bytes = [0u8; 8];
    id_bytes.copy_from_slice(&payload[32..]);
    Ok((key, u64::from_be_bytes(id_bytes)))
}

/// Returns true if the string is a well-formed `G` address.
pub fn is_valid_ed25519_public_key(s: &str) -> bool {
    decode_ed25519_public_key(s).is_ok()
}

/// Returns true if the string is a well-formed `M` address.
pub fn is_valid_muxed_account(s: &str) -> bool {
    decode_muxed_account(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_is_56_chars() {
        let address = encode_ed25519_public_key(&[0u8; 32]);
        assert_eq!(address.len(), 56);
        assert!(address.starts_with('G'));
    }

    #[test]
    fn muxed_account_is_69_chars() {
        let address = encode_muxed_account(&[0u8; 32], 0);
        assert_eq!(address.len(), 69);
        assert!(address.starts_with('M'));
    }

    #[test]
    fn seed_starts_with_s() {
        let seed = encode(VersionByte::Seed, &[1u8; 32]);
        assert!(seed.starts_with('S'));
        assert_eq!(decode(VersionByte::Seed, &seed).unwrap(), vec![1u8; 32]);
    }

    #[test]
    fn version_byte_mismatch() {
        let address = encode_ed25519_public_key(&[3u8; 32]);
        let err = decode(VersionByte::Seed, &address).unwrap_err();
        assert_eq!(err, StrkeyError::UnexpectedVersion(48));
        assert!(VersionByte::from_u8(48).is_some());
    }
}
