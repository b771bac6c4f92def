//! Folding of limb sequences into hash-sized groups.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::limbs::biguint_from_limbs_le;

/// Result of folding a limb sequence for signing.
///
/// `fields` holds the grouped values fed to the challenge hash; `folded` is
/// the whole sequence as one integer, recorded alongside the hash so auditors
/// can recover the original multi-limb message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimbDigest {
    /// One value per group of three limbs, each below `2^192`, in input
    /// order. A short final group leaves its high positions at zero.
    pub fields: Vec<BigUint>,
    /// The ungrouped fold: limb `i` weighted by `2^(64 * i)` across the whole
    /// sequence.
    pub folded: BigUint,
}

/// Folds a limb sequence into groups of three.
///
/// Each group combines as `limb[0] + limb[1]·2^64 + limb[2]·2^128`, a 192-bit
/// value that fits safely inside a ~254-bit field element. Group order and
/// the order of limbs within a short final group are preserved.
pub fn reduce(limbs: &[u64]) -> LimbDigest {
    let fields = limbs
        .chunks(3)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .fold(BigUint::zero(), |acc, (j, &limb)| {
                    acc | (BigUint::from(limb) << (64 * j))
                })
        })
        .collect();

    LimbDigest {
        fields,
        folded: biguint_from_limbs_le(limbs),
    }
}
