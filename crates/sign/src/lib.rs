//! A minimal crate providing typed-data signature recovery for Ricardian
//! contracts, implemented using [`secp256k1`] and the [`ricardian_hash`]
//! crate.
//!
//! Includes [`recover_typed`], [`parse_signature`], the EIP-712 digest
//! construction in [`eip712`] and the address helpers
//! [`checksum_address`], [`compare_addresses`] and [`public_key_address`].

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub use secp256k1;
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, Secp256k1,
};
use thiserror::Error;

mod address;
pub mod eip712;

pub use address::{checksum_address, compare_addresses, public_key_address};
pub use eip712::{typed_digest, DOMAIN_NAME, DOMAIN_VERSION};

/// Signature engine error.
///
/// Malformed input is never collapsed into a zero or sentinel address; every
/// failure surfaces as a variant here.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The network id is not a decimal chain id.
    #[error("invalid network id: {0}")]
    InvalidNetwork(String),
    /// An address string is not `0x`-prefixed 20-byte hex.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// A signature string is not `0x`-prefixed 65-byte hex.
    #[error("invalid signature encoding: {0}")]
    InvalidEncoding(String),
    /// The signature's recovery byte is outside {0, 1, 27, 28}.
    #[error("invalid recovery byte: {0}")]
    InvalidRecoveryId(u8),
    /// The verifying contract address is absent from the contract.
    #[error("missing verifying contract address")]
    MissingVerifyingContract,
    /// Public key recovery failed.
    #[error("signature recovery failed: {0}")]
    Recovery(#[from] secp256k1::Error),
}

/// Parse a `0x`-prefixed 65-byte `r || s || v` hex signature.
///
/// Accepts both raw recovery ids (0, 1) and the Ethereum convention
/// (27, 28).
pub fn parse_signature(s: &str) -> Result<RecoverableSignature, SignatureError> {
    let hex_part = s
        .strip_prefix("0x")
        .ok_or_else(|| SignatureError::InvalidEncoding(s.to_string()))?;
    let bytes =
        hex::decode(hex_part).map_err(|_| SignatureError::InvalidEncoding(s.to_string()))?;
    if bytes.len() != 65 {
        return Err(SignatureError::InvalidEncoding(s.to_string()));
    }
    let v = bytes[64];
    let rec = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };
    let recovery_id = RecoveryId::from_i32(i32::from(rec))?;
    Ok(RecoverableSignature::from_compact(&bytes[..64], recovery_id)?)
}

/// Recover the address that signed `value` under the typed message scoped
/// to `network` and `verifying_contract`.
///
/// Returns the recovered address in EIP-55 checksum form.
pub fn recover_typed(
    network: &str,
    verifying_contract: &str,
    value: &str,
    signature: &str,
) -> Result<String, SignatureError> {
    let digest = eip712::typed_digest(network, verifying_contract, value)?;
    let sig = parse_signature(signature)?;
    let secp = Secp256k1::new();
    let public_key = secp.recover_ecdsa(&Message::from_digest(digest), &sig)?;
    Ok(address::public_key_address(&public_key))
}
