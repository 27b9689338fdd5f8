//! Shared field validators used by the operation variants.
//!
//! Validation mirrors what the ledger itself will reject, so problems
//! surface before anything is encoded or submitted.

use lumen_strkey as strkey;

use crate::amount;
use crate::asset::Asset;
use crate::error::Error;
use crate::price;

/// Checks that the address is a well-formed `G` address, or also an `M`
/// address when `allow_muxed` is set.
pub(crate) fn validate_destination(
    field: &'static str,
    address: &str,
    allow_muxed: bool,
) -> Result<(), Error> {
    if strkey::is_valid_ed25519_public_key(address) {
        return Ok(());
    }
    if allow_muxed && strkey::is_valid_muxed_account(address) {
        return Ok(());
    }
    Err(Error::validation(
        field,
        format!("{address} is not a valid account address"),
    ))
}

/// Checks that the amount parses as a non-negative fixed-point decimal.
pub(crate) fn validate_amount(field: &'static str, s: &str) -> Result<(), Error> {
    amount::parse(s)
        .map(|_| ())
        .map_err(|e| Error::validation(field, e))
}

/// Checks that the price parses as a positive 32-bit rational.
pub(crate) fn validate_price(field: &'static str, s: &str) -> Result<(), Error> {
    price::parse(s)
        .map(|_| ())
        .map_err(|e| Error::validation(field, e))
}

/// Checks that a credit asset has a usable code and issuer. The native
/// asset always passes.
pub(crate) fn validate_asset(field: &'static str, asset: &Asset) -> Result<(), Error> {
    match asset {
        Asset::Native => Ok(()),
        Asset::Credit { code, issuer } => {
            if code.is_empty() || code.len() > 12 {
                return Err(Error::validation(
                    field,
                    "asset code must be between 1 and 12 characters",
                ));
            }
            if !strkey::is_valid_ed25519_public_key(issuer) {
                return Err(Error::validation(
                    field,
                    format!("{issuer} is not a valid asset issuer"),
                ));
            }
            Ok(())
        }
    }
}

/// Validates the field set shared by the two offer operations.
pub(crate) fn validate_offer(
    selling: &Asset,
    buying: &Asset,
    amount: &str,
    price: &str,
    offer_id: i64,
) -> Result<(), Error> {
    validate_asset("Selling", selling)?;
    validate_asset("Buying", buying)?;
    if selling == buying {
        return Err(Error::validation(
            "Buying",
            "buying and selling assets must differ",
        ));
    }
    validate_amount("Amount", amount)?;
    validate_price("Price", price)?;
    if offer_id < 0 {
        return Err(Error::validation("OfferID", "offer id must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

    #[test]
    fn offer_rejects_identical_asset_pair() {
        let asset = Asset::credit("USD", ISSUER);
        let err = validate_offer(&asset, &asset.clone(), "1", "1", 0).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "Buying", .. }));
    }

    #[test]
    fn offer_rejects_negative_offer_id() {
        let err = validate_offer(
            &Asset::native(),
            &Asset::credit("USD", ISSUER),
            "1",
            "1",
            -1,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "OfferID", .. }));
    }

    #[test]
    fn destination_modes() {
        assert!(validate_destination("Destination", ISSUER, false).is_ok());
        let key = lumen_strkey::decode_ed25519_public_key(ISSUER).unwrap();
        let muxed = lumen_strkey::encode_muxed_account(&key, 5);
        assert!(validate_destination("Destination", &muxed, true).is_ok());
        assert!(validate_destination("Destination", &muxed, false).is_err());
    }
}
