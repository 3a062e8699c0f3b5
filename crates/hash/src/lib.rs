//! A minimal crate containing the Ricardian content hash function and its
//! associated pre-hash canonical serialization.
//!
//! The pipeline is [`canonical_preimage`] → [`abi_encode_string`] →
//! [`keccak256`], with [`contract_hash`] as the shorthand over a full
//! [`Contract`]. Both the field order of the preimage and the single-string
//! ABI framing are wire format: reordering fields or changing the encoding
//! invalidates every previously issued signature.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use ricardian_types::{BlockCountry, Contract};
use sha3::Digest;

/// Sentinel rendered for absent optional fields.
///
/// Matches the `null` token previously issued signatures were computed over.
const ABSENT: &str = "null";

/// The semantic fields that participate in the content hash.
///
/// A borrowed view rather than an owned record: it is rebuilt from a
/// [`Contract`] on every verification and discarded with it. The signatures,
/// the contract type and the two party addresses are deliberately not part
/// of this view. They are verified against the resulting hash, not hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFields<'a> {
    /// The serialized legal text markup.
    pub legal_contract: &'a str,
    /// Creation date token.
    pub created: &'a str,
    /// Expiry date token.
    pub expires: &'a str,
    /// Post-signing redirect URL.
    pub redirect_to: &'a str,
    /// Issuing platform version.
    pub version: &'a str,
    /// The issuer's address.
    pub issuer: &'a str,
    /// Sanction regimes, serialized as a JSON array.
    pub blocked_countries: &'a [BlockCountry],
    /// Blocked signer addresses, serialized as a JSON array.
    pub blocked_addresses: &'a [String],
    /// The network identifier.
    pub network: &'a str,
    /// The attached smart contract address, if any.
    pub smart_contract: Option<&'a str>,
    /// The attached ERC20 descriptor, if any.
    pub erc20: Option<&'a str>,
}

impl<'a> HashFields<'a> {
    /// Borrow the hashed subset of a contract's fields.
    pub fn from_contract(contract: &'a Contract) -> Self {
        Self {
            legal_contract: &contract.legal_contract,
            created: &contract.created,
            expires: &contract.expires,
            redirect_to: &contract.redirect_to,
            version: &contract.version,
            issuer: &contract.issuer,
            blocked_countries: &contract.blocked_countries,
            blocked_addresses: &contract.blocked_addresses,
            network: &contract.network,
            smart_contract: contract.smart_contract.as_deref(),
            erc20: contract.erc20.as_deref(),
        }
    }
}

/// Concatenate the hashed fields into the canonical preimage.
///
/// Field order is fixed by protocol. The two sequence fields are serialized
/// as compact JSON arrays, scalars are appended verbatim, absent optionals
/// render as the `null` sentinel, and no delimiter is inserted between
/// fields.
pub fn canonical_preimage(fields: &HashFields) -> String {
    let blocked_countries = serde_json::to_string(fields.blocked_countries)
        .expect("serializing a slice of sanction codes should never fail");
    let blocked_addresses = serde_json::to_string(fields.blocked_addresses)
        .expect("serializing a slice of strings should never fail");
    let mut preimage = String::with_capacity(
        fields.legal_contract.len()
            + blocked_countries.len()
            + blocked_addresses.len()
            + 128,
    );
    preimage.push_str(fields.legal_contract);
    preimage.push_str(fields.created);
    preimage.push_str(fields.expires);
    preimage.push_str(fields.redirect_to);
    preimage.push_str(fields.version);
    preimage.push_str(fields.issuer);
    preimage.push_str(&blocked_countries);
    preimage.push_str(&blocked_addresses);
    preimage.push_str(fields.network);
    preimage.push_str(fields.smart_contract.unwrap_or(ABSENT));
    preimage.push_str(fields.erc20.unwrap_or(ABSENT));
    preimage
}

/// ABI-encode a single dynamic `string` parameter.
///
/// Layout: a 32-byte big-endian offset word (always `0x20` for a lone
/// parameter), a 32-byte big-endian byte length, then the UTF-8 bytes
/// zero-padded to a 32-byte boundary.
pub fn abi_encode_string(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let padded_len = bytes.len().div_ceil(32) * 32;
    let mut out = Vec::with_capacity(64 + padded_len);
    let mut offset = [0u8; 32];
    offset[31] = 0x20;
    out.extend_from_slice(&offset);
    let mut len_word = [0u8; 32];
    len_word[24..].copy_from_slice(&(bytes.len() as u64).to_be_bytes());
    out.extend_from_slice(&len_word);
    out.extend_from_slice(bytes);
    out.resize(64 + padded_len, 0);
    out
}

/// Hash bytes with Keccak-256.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = sha3::Keccak256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Hash a canonical preimage into the content hash string both parties sign
/// over.
///
/// The preimage is first framed as an ABI `string` parameter, then hashed
/// with Keccak-256. The result is rendered as a lowercase `0x`-prefixed hex
/// string because the hex string itself, not the raw digest, is the typed
/// message value.
pub fn content_hash(preimage: &str) -> String {
    format!("0x{}", hex::encode(keccak256(&abi_encode_string(preimage))))
}

/// Shorthand for hashing a contract's semantic fields.
pub fn contract_hash(contract: &Contract) -> String {
    content_hash(&canonical_preimage(&HashFields::from_contract(contract)))
}
