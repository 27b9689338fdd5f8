//! Unpadded RFC 4648 base32, as used by the strkey format.

use crate::StrkeyError;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn decode_char(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'2'..=b'7' => Some(c - b'2' + 26),
        _ => None,
    }
}

pub(crate) fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for &b in data {
        buffer = (buffer << 8) | b as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

pub(crate) fn decode(s: &str) -> Result<Vec<u8>, StrkeyError> {
    let mut out = Vec::with_capacity(s.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for c in s.bytes() {
        let val = decode_char(c).ok_or(StrkeyError::InvalidCharacter)?;
        buffer = (buffer << 5) | val as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    // Leftover bits are encoding slack and must be zero for the input to be
    // the canonical form of the decoded bytes.
    if buffer & ((1 << bits) - 1) != 0 {
        return Err(StrkeyError::NonCanonical);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn roundtrip() {
        let data = b"\x00\x01\x02\xff\xfe\xfd";
        assert_eq!(decode(&encode(data)).unwrap(), data.to_vec());
    }

    #[test]
    fn rejects_lowercase() {
        assert_eq!(decode("abc").unwrap_err(), StrkeyError::InvalidCharacter);
    }

    #[test]
    fn rejects_digits_outside_alphabet() {
        assert_eq!(decode("018").unwrap_err(), StrkeyError::InvalidCharacter);
    }
}
