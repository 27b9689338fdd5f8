//! Typed ledger operations with validation and canonical wire encoding.
//!
//! Each operation kind is a plain struct of caller-facing strings and
//! typed fields; converting to and from the wire form goes through
//! [`lumen_xdr`]. Amounts are decimal strings with up to seven fractional
//! digits, prices are decimal strings approximated as 32-bit rationals,
//! and account addresses are strkey strings.
//!
//! All wire conversions take an explicit `muxed` flag. In plain mode only
//! `G` addresses are accepted and multiplexed wire accounts render as
//! their underlying `G` address; in muxed mode `M` addresses round-trip
//! with their sub-account id intact.
//!
//! # Example
//!
//! ```
//! use lumen_txnbuild::{Asset, Operation, Payment};
//!
//! let payment = Payment {
//!     destination: "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA".into(),
//!     amount: "10".into(),
//!     asset: Asset::native(),
//!     source_account: String::new(),
//! };
//! payment.validate().unwrap();
//! let wire = payment.build_xdr(false).unwrap();
//! let back = Payment::from_xdr(&wire, false).unwrap();
//! assert_eq!(back.amount, "10.0000000");
//! let op: Operation = payment.into();
//! assert_eq!(op.source_account(), "");
//! ```

pub mod account;
pub mod amount;
pub mod asset;
pub mod price;

mod clawback_claimable_balance;
mod create_account;
mod error;
mod manage_buy_offer;
mod manage_sell_offer;
mod operation;
mod payment;
mod validators;

pub use asset::{Asset, AssetError};
pub use clawback_claimable_balance::ClawbackClaimableBalance;
pub use create_account::CreateAccount;
pub use error::Error;
pub use manage_buy_offer::ManageBuyOffer;
pub use manage_sell_offer::ManageSellOffer;
pub use operation::Operation;
pub use payment::Payment;
