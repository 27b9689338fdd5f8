//! Creates, updates, or deletes a buy offer on the order book.

use lumen_xdr::{self as xdr, OperationBody};

use crate::account;
use crate::amount;
use crate::asset::Asset;
use crate::error::Error;
use crate::manage_sell_offer::render_price;
use crate::price;
use crate::validators;

/// Manages a buy offer. The amount is denominated in the asset being
/// bought; otherwise the semantics mirror the sell side, with offer id zero
/// creating and amount zero deleting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManageBuyOffer {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: String,
    pub price: String,
    pub offer_id: i64,
    pub source_account: String,
}

impl ManageBuyOffer {
    pub fn validate(&self) -> Result<(), Error> {
        validators::validate_offer(
            &self.selling,
            &self.buying,
            &self.buy_amount,
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
        let buy_amount =
            amount::parse(&self.buy_amount).map_err(|e| Error::encoding("Amount", e))?;
        let price = price::parse(&self.price).map_err(|e| Error::encoding("Price", e))?;
        let source_account = account::op_source(&self.source_account, muxed)
            .map_err(|e| Error::encoding("SourceAccount", e))?;
        Ok(xdr::Operation {
            source_account,
            body: OperationBody::ManageBuyOffer(xdr::ManageBuyOfferOp {
                selling,
                buying,
                buy_amount,
                price,
                offer_id: self.offer_id,
            }),
        })
    }

    pub fn from_xdr(op: &xdr::Operation, muxed: bool) -> Result<Self, Error> {
        let OperationBody::ManageBuyOffer(body) = &op.body else {
            return Err(Error::UnexpectedVariant);
        };
        Ok(ManageBuyOffer {
            selling: Asset::from_xdr(&body.selling)
                .map_err(|e| Error::decoding("Selling", e))?,
            buying: Asset::from_xdr(&body.buying)
                .map_err(|e| Error::decoding("Buying", e))?,
            buy_amount: amount::to_string(body.buy_amount),
            price: render_price(&body.price),
            offer_id: body.offer_id,
            source_account: account::source_from_xdr(&op.source_account, muxed),
        })
    }

    pub fn source_account(&self) -> &str {
        &self.source_account
    }
}
