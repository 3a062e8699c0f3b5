//! Ethereum address parsing, derivation and EIP-55 checksum handling.

use ricardian_hash::keccak256;
use secp256k1::PublicKey;

use crate::SignatureError;

/// Parse a `0x`-prefixed 20-byte hex address, any casing.
pub(crate) fn parse_address(s: &str) -> Result<[u8; 20], SignatureError> {
    let invalid = || SignatureError::InvalidAddress(s.to_string());
    let hex_part = s.strip_prefix("0x").ok_or_else(invalid)?;
    let bytes = hex::decode(hex_part).map_err(|_| invalid())?;
    bytes.try_into().map_err(|_| invalid())
}

/// Render an address in EIP-55 checksum form: a hex character is
/// uppercased when the corresponding nibble of the keccak digest of the
/// lowercase hex address is >= 8.
fn checksum(addr: [u8; 20]) -> String {
    let lower = hex::encode(addr);
    let digest = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let shift = if i % 2 == 0 { 4 } else { 0 };
        let nibble = (digest[i / 2] >> shift) & 0x0f;
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalize an address string to its EIP-55 checksum form.
pub fn checksum_address(s: &str) -> Result<String, SignatureError> {
    Ok(checksum(parse_address(s)?))
}

/// Compare two address strings for checksum-normalized equality.
///
/// Case differences between representations of the same address compare
/// equal. A string that does not parse as an address compares unequal to
/// everything rather than erroring.
pub fn compare_addresses(a: &str, b: &str) -> bool {
    match (parse_address(a), parse_address(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Derive the checksummed Ethereum address of a secp256k1 public key.
///
/// The address is the trailing 20 bytes of the keccak digest of the
/// uncompressed public key without its `0x04` tag byte.
pub fn public_key_address(public_key: &PublicKey) -> String {
    let uncompressed = public_key.serialize_uncompressed();
    let digest = keccak256(&uncompressed[1..]);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&digest[12..]);
    checksum(addr)
}
