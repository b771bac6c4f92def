//! Fixed-width little-endian limb array conversions.

use num_bigint::BigUint;

use crate::errors::CodecError;

/// Converts a value into `n` little-endian 64-bit limbs.
///
/// Limb `i` is `(value >> (64 * i)) mod 2^64`. Values wider than `64 * n`
/// bits are truncated deterministically; use
/// [`biguint_to_limbs_le_checked`] when the caller requires a lossless
/// round-trip.
pub fn biguint_to_limbs_le(value: &BigUint, n: usize) -> Vec<u64> {
    let digits = value.to_u64_digits();
    (0..n).map(|i| digits.get(i).copied().unwrap_or(0)).collect()
}

/// Converts a value into `n` little-endian 64-bit limbs, rejecting values
/// that do not fit.
pub fn biguint_to_limbs_le_checked(value: &BigUint, n: usize) -> Result<Vec<u64>, CodecError> {
    if value.bits() > 64 * n as u64 {
        return Err(CodecError::ValueOutOfRange(format!(
            "{} bits do not fit in {n} limbs",
            value.bits()
        )));
    }
    Ok(biguint_to_limbs_le(value, n))
}

/// Reassembles a little-endian limb array into an integer.
pub fn biguint_from_limbs_le(limbs: &[u64]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|l| l.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}
