//! Text marshalling of wire values: base64 for transport payloads, hex for
//! identifiers carried in request/response fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::decoder::DecodeError;
use crate::XdrCodec;

/// Error for base64/hex marshalling of wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarshalError {
    #[error("base64 decode failed: {0}")]
    Base64(String),
    #[error("hex decode failed")]
    Hex,
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Encodes a wire value as standard padded base64.
pub fn to_base64<T: XdrCodec>(value: &T) -> String {
    STANDARD.encode(value.to_bytes())
}

/// Decodes a wire value from base64. The decoded bytes must form exactly
/// one value; trailing bytes are an error.
pub fn from_base64<T: XdrCodec>(s: &str) -> Result<T, MarshalError> {
    let bytes = STANDARD
        .decode(s)
        .map_err(|e| MarshalError::Base64(e.to_string()))?;
    Ok(T::from_bytes(&bytes)?)
}

/// Encodes a wire value as lowercase hex.
pub fn to_hex<T: XdrCodec>(value: &T) -> String {
    let bytes = value.to_bytes();
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(char::from_digit((b >> 4) as u32, 16).unwrap());
        out.push(char::from_digit((b & 0xf) as u32, 16).unwrap());
    }
    out
}

/// Decodes a wire value from hex. Accepts both hex digit cases; the decoded
/// bytes must form exactly one value.
pub fn from_hex<T: XdrCodec>(s: &str) -> Result<T, MarshalError> {
    if s.len() % 2 != 0 {
        return Err(MarshalError::Hex);
    }
    let mut bytes = Vec::with_capacity(s.len() / 2);
    let chars: Vec<char> = s.chars().collect();
    for pair in chars.chunks(2) {
        let hi = pair[0].to_digit(16).ok_or(MarshalError::Hex)?;
        let lo = pair[1].to_digit(16).ok_or(MarshalError::Hex)?;
        bytes.push(((hi << 4) | lo) as u8);
    }
    Ok(T::from_bytes(&bytes)?)
}
