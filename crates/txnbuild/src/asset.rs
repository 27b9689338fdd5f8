//! Caller-facing asset model.
//!
//! An asset is either the native token or a credit asset identified by a
//! 1-12 character code and an issuer address. On the wire the code lands in
//! a fixed 4- or 12-byte field, NUL padded on the right; codes of length
//! five and up always take the 12-byte form.

use lumen_xdr::{self as xdr, AccountId};

use crate::account::{self, AddressError};

/// Asset conversion error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("asset code must be between 1 and 12 characters")]
    CodeLength,
    #[error("asset code is not valid UTF-8")]
    CodeEncoding,
    #[error("asset issuer: {0}")]
    Issuer(#[from] AddressError),
}

/// The native token or a credit asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Native,
    Credit { code: String, issuer: String },
}

impl Default for Asset {
    fn default() -> Self {
        Asset::Native
    }
}

impl Asset {
    pub fn native() -> Self {
        Asset::Native
    }

    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Asset::Credit {
            code: code.into(),
            issuer: issuer.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// Converts to the wire form, choosing the 4- or 12-byte code field by
    /// code length.
    pub fn to_xdr(&self) -> Result<xdr::Asset, AssetError> {
        match self {
            Asset::Native => Ok(xdr::Asset::Native),
            Asset::Credit { code, issuer } => {
                let bytes = code.as_bytes();
                let issuer = account::decode_account_id(issuer)?;
                match bytes.len() {
                    1..=4 => {
                        let mut padded = [0u8; 4];
                        padded[..bytes.len()].copy_from_slice(bytes);
                        Ok(xdr::Asset::CreditAlphanum4 {
                            code: padded,
                            issuer,
                        })
                    }
                    5..=12 => {
                        let mut padded = [0u8; 12];
                        padded[..bytes.len()].copy_from_slice(bytes);
                        Ok(xdr::Asset::CreditAlphanum12 {
                            code: padded,
                            issuer,
                        })
                    }
                    _ => Err(AssetError::CodeLength),
                }
            }
        }
    }

    /// Reads the wire form back, trimming the NUL padding from the code.
    pub fn from_xdr(asset: &xdr::Asset) -> Result<Self, AssetError> {
        match asset {
            xdr::Asset::Native => Ok(Asset::Native),
            xdr::Asset::CreditAlphanum4 { code, issuer } => {
                credit_from_wire(code, issuer)
            }
            xdr::Asset::CreditAlphanum12 { code, issuer } => {
                credit_from_wire(code, issuer)
            }
        }
    }
}

fn credit_from_wire(code: &[u8], issuer: &AccountId) -> Result<Asset, AssetError> {
    let trimmed: &[u8] = match code.iter().rposition(|&b| b != 0) {
        Some(last) => &code[..=last],
        None => &[],
    };
    let code = std::str::from_utf8(trimmed)
        .map_err(|_| AssetError::CodeEncoding)?
        .to_owned();
    Ok(Asset::Credit {
        code,
        issuer: account::encode_account_id(issuer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

    #[test]
    fn native_roundtrip() {
        let wire = Asset::native().to_xdr().unwrap();
        assert_eq!(wire, xdr::Asset::Native);
        assert_eq!(Asset::from_xdr(&wire).unwrap(), Asset::Native);
    }

    #[test]
    fn short_codes_take_the_4_byte_form() {
        for code in ["A", "AB", "ABC", "ABCD"] {
            let wire = Asset::credit(code, ISSUER).to_xdr().unwrap();
            assert!(matches!(wire, xdr::Asset::CreditAlphanum4 { .. }));
            assert_eq!(Asset::from_xdr(&wire).unwrap(), Asset::credit(code, ISSUER));
        }
    }

    #[test]
    fn long_codes_take_the_12_byte_form() {
        for code in ["ABCDE", "ABCDEFGHIJKL"] {
            let wire = Asset::credit(code, ISSUER).to_xdr().unwrap();
            assert!(matches!(wire, xdr::Asset::CreditAlphanum12 { .. }));
            assert_eq!(Asset::from_xdr(&wire).unwrap(), Asset::credit(code, ISSUER));
        }
    }

    #[test]
    fn code_padding_is_nul() {
        let wire = Asset::credit("USD", ISSUER).to_xdr().unwrap();
        let xdr::Asset::CreditAlphanum4 { code, .. } = wire else {
            panic!("expected the 4-byte form");
        };
        assert_eq!(&code, b"USD\0");
    }

    #[test]
    fn code_length_bounds() {
        assert_eq!(
            Asset::credit("", ISSUER).to_xdr().unwrap_err(),
            AssetError::CodeLength
        );
        assert_eq!(
            Asset::credit("ABCDEFGHIJKLM", ISSUER).to_xdr().unwrap_err(),
            AssetError::CodeLength
        );
    }

    #[test]
    fn bad_issuer_reported() {
        let err = Asset::credit("USD", "not-an-address").to_xdr().unwrap_err();
        assert!(matches!(err, AssetError::Issuer(_)));
    }
}
