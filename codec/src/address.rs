//! Checksummed rendering of 160-bit addresses.

use sha3::{Digest, Keccak256};

/// Compute Keccak-256 of the input bytes.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Renders a 20-byte address as a `0x`-prefixed mixed-case checksum string.
///
/// A hex letter is uppercased when the corresponding nibble of
/// `keccak256(lowercase_hex)` is at least 8 (the EIP-55 convention).
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        let nibble = (digest[i / 2] >> (4 * (1 - i % 2))) & 0x0f;
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
