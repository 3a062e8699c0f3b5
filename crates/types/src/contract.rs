//! # Contract
//!
//! The record parsed out of a Ricardian contract document.

use serde::{Deserialize, Serialize};

use crate::{BlockCountry, ContractType};

/// A Ricardian contract as recorded in a document's attributes.
///
/// Constructed once per parse by the downstream `ricardian-parse` crate and
/// never mutated. The subset of fields that participates in the content hash
/// is selected by the downstream `ricardian_hash::HashFields` view; the
/// signatures, the contract type and the two party addresses are verified
/// against that hash rather than hashed themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    /// Whether this document is an unsigned template or a signed proof.
    pub contract_type: ContractType,
    /// The issuing platform version. Opaque hashing input.
    pub version: String,
    /// The date the contract was signed. Opaque.
    pub signed_on: String,
    /// The date the agreement was created. Opaque hashing input.
    pub created: String,
    /// The date after which the agreement can no longer be accepted. Opaque
    /// hashing input.
    pub expires: String,
    /// The URL the document redirects to after signing.
    pub redirect_to: String,
    /// The URL of the acceptable contract this document derives from.
    ///
    /// Compared byte-for-byte against a caller-supplied expectation; no URL
    /// normalization is applied.
    pub parent_url: String,
    /// The chain/network identifier. Opaque until signature verification,
    /// where it must parse as a decimal chain id.
    pub network: String,
    /// The issuer's claimed address.
    pub issuer: String,
    /// The issuer's signature over the content hash.
    pub issuer_signature: String,
    /// The participant's claimed address.
    pub participant: String,
    /// The participant's signature over the content hash.
    pub participant_signature: String,
    /// The address of the attached smart contract, absent when the wire
    /// carries the `null` sentinel.
    pub smart_contract: Option<String>,
    /// The descriptor of the ERC20 token added to the signer's wallet,
    /// absent when the wire carries the `null` sentinel.
    pub erc20: Option<String>,
    /// The serialized inner markup of the display region. This is the
    /// human-readable legal text and is part of the signed payload.
    pub legal_contract: String,
    /// Addresses blocked from signing the agreement, in wire order.
    pub blocked_addresses: Vec<String>,
    /// Sanction regimes regulating who may sign, in wire order.
    pub blocked_countries: Vec<BlockCountry>,
}

impl Contract {
    /// Whether this contract carries both parties' signatures.
    pub fn is_fulfilled(&self) -> bool {
        self.contract_type == ContractType::Fulfilled
    }
}
