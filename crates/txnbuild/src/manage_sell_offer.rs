//! Creates, updates, or deletes a sell offer on the order book.

use lumen_xdr::{self as xdr, OperationBody, Price};

use crate::account;
use crate::amount;
use crate::asset::Asset;
use crate::error::Error;
use crate::price;
use crate::validators;

/// Issuer of the placeholder asset filled into delete operations.
const PLACEHOLDER_ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

/// Manages a sell offer: offer id zero creates a new offer, a non-zero id
/// updates it, and amount zero deletes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManageSellOffer {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: String,
    pub price: String,
    pub offer_id: i64,
    pub source_account: String,
}

impl ManageSellOffer {
    /// Builds an operation that creates a new offer.
    pub fn create_offer(
        selling: Asset,
        buying: Asset,
        amount: &str,
        price: &str,
        source_account: Option<&str>,
    ) -> Self {
        ManageSellOffer {
            selling,
            buying,
            amount: amount.to_owned(),
            price: price.to_owned(),
            offer_id: 0,
            source_account: source_account.unwrap_or_default().to_owned(),
        }
    }

    /// Builds an operation that updates an existing offer in place.
    pub fn update_offer(
        selling: Asset,
        buying: Asset,
        amount: &str,
        price: &str,
        offer_id: i64,
        source_account: Option<&str>,
    ) -> Self {
        ManageSellOffer {
            selling,
            buying,
            amount: amount.to_owned(),
            price: price.to_owned(),
            offer_id,
            source_account: source_account.unwrap_or_default().to_owned(),
        }
    }

    /// Builds an operation that deletes an existing offer.
    ///
    /// The ledger only reads the amount for a delete, but validation still
    /// requires a well-formed, non-identical asset pair and a positive
    /// price, so placeholder values are filled in.
    pub fn delete_offer(offer_id: i64, source_account: Option<&str>) -> Self {
        ManageSellOffer {
            selling: Asset::native(),
            buying: Asset::credit("FAKE", PLACEHOLDER_ISSUER),
            amount: "0".to_owned(),
            price: "1".to_owned(),
            offer_id,
            source_account: source_account.unwrap_or_default().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        validators::validate_offer(
            &self.selling,
            &self.buying,
            &self.amount,
            &self.price,
            self.offer_id,
        )
    }

    pub fn build_xdr(&self, muxed: bool) -> Result<xdr::Operation, Error> {
        let selling = self
            .selling
            .to_xdr()
            .map_err(|e| Error::encoding("Selling", e))?;
        let buying = self
            .buying
            .to_xdr()
            .map_err(|e| Error::encoding("Buying", e))?;
        let amount = amount::parse(&self.amount).map_err(|e| Error::encoding("Amount", e))?;
        let price = price::parse(&self.price).map_err(|e| Error::encoding("Price", e))?;
        let source_account = account::op_source(&self.source_account, muxed)
            .map_err(|e| Error::encoding("SourceAccount", e))?;
        Ok(xdr::Operation {
            source_account,
            body: OperationBody::ManageSellOffer(xdr::ManageSellOfferOp {
                selling,
                buying,
                amount,
                price,
                offer_id: self.offer_id,
            }),
        })
    }

    pub fn from_xdr(op: &xdr::Operation, muxed: bool) -> Result<Self, Error> {
        let OperationBody::ManageSellOffer(body) = &op.body else {
            return Err(Error::UnexpectedVariant);
        };
        Ok(ManageSellOffer {
            selling: Asset::from_xdr(&body.selling)
                .map_err(|e| Error::decoding("Selling", e))?,
            buying: Asset::from_xdr(&body.buying)
                .map_err(|e| Error::decoding("Buying", e))?,
            amount: amount::to_string(body.amount),
            price: render_price(&body.price),
            offer_id: body.offer_id,
            source_account: account::source_from_xdr(&op.source_account, muxed),
        })
    }

    pub fn source_account(&self) -> &str {
        &self.source_account
    }
}

/// An all-zero wire price (possible in partially populated data) renders as
/// the empty string rather than dividing by zero.
pub(crate) fn render_price(wire: &Price) -> String {
    if wire.d == 0 {
        return String::new();
    }
    price::to_string(wire)
}
