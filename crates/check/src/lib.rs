//! Core logic for verifying Ricardian contract documents.
//!
//! Typical usage is to validate the content identifier and fetch the
//! document bytes, parse them into a [`types::Contract`], then verify the
//! recorded signatures and the parent lineage.
//!
//! ## Contract Verification
//!
//! - [`verify::verify_fulfilled`] fetches, parses and verifies a document
//!   end to end.
//! - [`verify::verify_participant`] verifies both recorded signatures over
//!   the canonical content hash and returns the recovered participant
//!   address.
//! - [`verify::match_parent`] checks the parent lineage of a parsed
//!   contract.

#![deny(missing_docs)]
#![deny(unsafe_code)]

#[doc(inline)]
pub use ricardian_fetch as fetch;
#[doc(inline)]
pub use ricardian_hash as hash;
#[doc(inline)]
pub use ricardian_parse as parse;
#[doc(inline)]
pub use ricardian_sign as sign;
#[doc(inline)]
pub use ricardian_types as types;

pub mod verify;
