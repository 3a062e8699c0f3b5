//! EIP-712 version 3 message digesting.
//!
//! The domain and struct schemas are pinned by the signing protocol: domain
//! `{name: "Ricardian Fabric", version: "1", chainId, verifyingContract}`
//! and a single-field primary type `doc(string value)`. Changing either
//! invalidates every previously issued signature.

use once_cell::sync::Lazy;
use ricardian_hash::keccak256;

use crate::{address, SignatureError};

/// Domain name pinned by the signing protocol.
pub const DOMAIN_NAME: &str = "Ricardian Fabric";
/// Domain version pinned by the signing protocol.
pub const DOMAIN_VERSION: &str = "1";

static DOMAIN_TYPE_HASH: Lazy<[u8; 32]> = Lazy::new(|| {
    keccak256(b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)")
});

static DOC_TYPE_HASH: Lazy<[u8; 32]> = Lazy::new(|| keccak256(b"doc(string value)"));

fn uint256_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn address_word(addr: [u8; 20]) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(&addr);
    word
}

fn domain_separator(chain_id: u64, verifying_contract: [u8; 20]) -> [u8; 32] {
    let mut encoded = Vec::with_capacity(160);
    encoded.extend_from_slice(&*DOMAIN_TYPE_HASH);
    encoded.extend_from_slice(&keccak256(DOMAIN_NAME.as_bytes()));
    encoded.extend_from_slice(&keccak256(DOMAIN_VERSION.as_bytes()));
    encoded.extend_from_slice(&uint256_word(chain_id));
    encoded.extend_from_slice(&address_word(verifying_contract));
    keccak256(&encoded)
}

fn struct_hash(value: &str) -> [u8; 32] {
    let mut encoded = Vec::with_capacity(64);
    encoded.extend_from_slice(&*DOC_TYPE_HASH);
    encoded.extend_from_slice(&keccak256(value.as_bytes()));
    keccak256(&encoded)
}

/// Compute the EIP-712 digest for `value` scoped to the given network and
/// verifying contract.
///
/// The digest is `keccak256(0x19 || 0x01 || domain_separator || struct_hash)`.
/// The network id must parse as a decimal chain id and the verifying
/// contract as a `0x`-prefixed address.
pub fn typed_digest(
    network: &str,
    verifying_contract: &str,
    value: &str,
) -> Result<[u8; 32], SignatureError> {
    let chain_id: u64 = network
        .parse()
        .map_err(|_| SignatureError::InvalidNetwork(network.to_string()))?;
    let contract = address::parse_address(verifying_contract)?;
    let mut message = Vec::with_capacity(66);
    message.extend_from_slice(&[0x19, 0x01]);
    message.extend_from_slice(&domain_separator(chain_id, contract));
    message.extend_from_slice(&struct_hash(value));
    Ok(keccak256(&message))
}
