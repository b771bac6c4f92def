//! Hex string to big-integer conversions in both byte orders.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::CodecError;

fn strip_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x").unwrap_or(hex)
}

/// Parses a big-endian hex string, with or without a `0x` prefix.
///
/// Odd-length input is left-padded with a leading zero nibble before
/// interpretation.
pub fn hex_to_biguint_be(hex: &str) -> Result<BigUint, CodecError> {
    let s = strip_prefix(hex);
    if s.is_empty() {
        return Err(CodecError::MalformedHex(hex.to_string()));
    }
    let padded;
    let s = if s.len() % 2 != 0 {
        padded = format!("0{s}");
        &padded
    } else {
        s
    };
    let bytes = hex::decode(s).map_err(|_| CodecError::MalformedHex(hex.to_string()))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Parses a little-endian hex string, with or without a `0x` prefix.
///
/// The string is read as a byte sequence (pairs of hex digits) with the
/// least-significant byte first. Odd-length input is rejected: the byte
/// grouping of a little-endian string is ambiguous once a nibble is missing.
pub fn hex_to_biguint_le(hex: &str) -> Result<BigUint, CodecError> {
    let s = strip_prefix(hex);
    if s.is_empty() || s.len() % 2 != 0 {
        return Err(CodecError::MalformedHex(hex.to_string()));
    }
    let bytes = hex::decode(s).map_err(|_| CodecError::MalformedHex(hex.to_string()))?;
    Ok(BigUint::from_bytes_le(&bytes))
}

/// Renders a value as little-endian hex padded (or truncated) to exactly
/// `width` bytes.
///
/// Truncation keeps the low-order bytes, matching the limb conversion policy
/// in [`crate::biguint_to_limbs_le`]. Callers that need a lossless rendering
/// must pick a sufficient width.
pub fn biguint_to_hex_le(value: &BigUint, width: usize) -> String {
    let mut bytes = value.to_bytes_le();
    bytes.resize(width, 0);
    hex::encode(bytes)
}

/// Formats a byte slice as lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Formats a byte slice as the decimal rendering of the big-endian unsigned
/// integer it spells.
///
/// The whole sequence is one integer; bytes are never formatted
/// independently.
pub fn bytes_to_decimal_string(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(10)
}

/// A validated little-endian hex number.
///
/// Wraps the byte form of a non-negative integer whose canonical hex string
/// is the byte-reversed form of its big-endian rendering. Immutable; every
/// accessor is a pure derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeHexNum {
    bytes: Vec<u8>,
}

impl LeHexNum {
    /// Validates and wraps a little-endian hex string.
    pub fn new(hex: &str) -> Result<Self, CodecError> {
        let s = strip_prefix(hex);
        if s.is_empty() || s.len() % 2 != 0 {
            return Err(CodecError::MalformedHex(hex.to_string()));
        }
        let bytes = hex::decode(s).map_err(|_| CodecError::MalformedHex(hex.to_string()))?;
        Ok(Self { bytes })
    }

    /// Wraps a value at a fixed byte width.
    pub fn from_biguint(value: &BigUint, width: usize) -> Self {
        let mut bytes = value.to_bytes_le();
        bytes.resize(width, 0);
        Self { bytes }
    }

    /// The canonical little-endian hex string, without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The wrapped integer value.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.bytes)
    }

    /// The value as a fixed-length little-endian limb array.
    pub fn to_limbs(&self, n: usize) -> Vec<u64> {
        crate::limbs::biguint_to_limbs_le(&self.to_biguint(), n)
    }
}
