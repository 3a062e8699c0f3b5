//! Base types for the Ricardian contract verification crates.
//!
//! The central type is [`Contract`], the flat record extracted from a
//! contract document's attributes. Downstream crates build the canonical
//! hash preimage from it (`ricardian-hash`) and verify the recorded
//! signatures over that hash (`ricardian-sign`, `ricardian-check`).

#![deny(missing_docs)]
#![deny(unsafe_code)]

use core::fmt;
use serde::{Deserialize, Serialize};

mod contract;

pub use contract::Contract;

/// Whether a document is an unsigned template or a signed proof of
/// acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    /// A template a participant may later sign.
    Acceptable,
    /// A contract signed by both the issuer and a participant.
    Fulfilled,
}

impl ContractType {
    /// Parse the wire token carried in the `data-contracttype` attribute.
    ///
    /// Returns `None` for any token outside the wire enumeration.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "acceptable" => Some(Self::Acceptable),
            "fulfilled" => Some(Self::Fulfilled),
            _ => None,
        }
    }

    /// The wire token for this contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acceptable => "acceptable",
            Self::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sanction regimes a contract can apply against signers.
///
/// The wire tokens are fixed by previously issued contracts, including the
/// `OFEC` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCountry {
    /// Addresses sanctioned under the OFAC lists.
    #[serde(rename = "OFEC")]
    Ofec,
    /// Addresses sanctioned by the European Union.
    #[serde(rename = "EU")]
    Eu,
    /// Addresses sanctioned by the United Nations.
    #[serde(rename = "UN")]
    Un,
    /// Signers located in the USA.
    #[serde(rename = "BLOCKUSA")]
    BlockUsa,
}

impl BlockCountry {
    /// The wire token for this sanction code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ofec => "OFEC",
            Self::Eu => "EU",
            Self::Un => "UN",
            Self::BlockUsa => "BLOCKUSA",
        }
    }
}

impl fmt::Display for BlockCountry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
