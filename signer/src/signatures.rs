//! Signature records, challenge hashing and verification.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use codec::{biguint_to_hex_le, hex_to_biguint_le, reduce};

use crate::errors::SignError;
use crate::primitives::CurveBackend;

/// A complete signature over a limb sequence.
///
/// Every field is a little-endian hex string at the backend's declared byte
/// width, except `msg`, which uses the exact width of the signed limb
/// sequence:
///
/// - `msg` — the raw fold of the whole limb sequence (the auditable
///   plaintext message);
/// - `hash` — the sponge challenge over the grouped fold;
/// - `pkx`, `pky` — the signer's public key coordinates;
/// - `sigx`, `sigy` — the ephemeral commitment point `R`;
/// - `sigr` — the response scalar `s = r + sk·H`.
///
/// Produced once per sign operation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub msg: String,
    pub hash: String,
    pub pkx: String,
    pub pky: String,
    pub sigx: String,
    pub sigy: String,
    pub sigr: String,
}

/// Computes the challenge for a limb sequence: the sponge hash over the
/// grouped fold, plus the raw fold recorded beside it.
pub(crate) fn challenge<C: CurveBackend>(ctx: &C, limbs: &[u64]) -> (C::Field, BigUint) {
    let digest = reduce(limbs);
    let fields: Vec<C::Field> = digest
        .fields
        .iter()
        .map(|v| ctx.field_from_biguint(v))
        .collect();
    (ctx.sponge(&fields), digest.folded)
}

/// Checks the Schnorr equation against already-parsed values.
///
/// Reconstructs `L = s·G` and `R' = R + H·P`, negates `R'` under the curve's
/// x-coordinate convention and accepts iff `L + (−R')` is the identity. This
/// is `s·G == R + H·P` rearranged. Any mismatch, whatever its cause, is a
/// plain `false`.
pub fn verify_parts<C: CurveBackend>(
    ctx: &C,
    digest: &BigUint,
    pkx: &BigUint,
    pky: &BigUint,
    sigx: &BigUint,
    sigy: &BigUint,
    sigr: &BigUint,
) -> bool {
    let l = ctx.scalar_mul(&ctx.base_point(), &ctx.scalar_from_biguint(sigr));
    let pk = ctx.point_from_coords(pkx, pky);
    let r = ctx.point_from_coords(sigx, sigy);
    let r_prime = ctx.add(&r, &ctx.scalar_mul(&pk, &ctx.scalar_from_biguint(digest)));
    ctx.is_identity(&ctx.add(&l, &ctx.negate(&r_prime)))
}

/// Checks a serialized signature record.
///
/// `Err` only ever signals malformed hex in one of the record fields, a
/// codec failure; every cryptographic mismatch comes back as `Ok(false)`.
pub fn verify_record<C: CurveBackend>(ctx: &C, record: &SignatureRecord) -> Result<bool, SignError> {
    let digest = hex_to_biguint_le(&record.hash)?;
    let pkx = hex_to_biguint_le(&record.pkx)?;
    let pky = hex_to_biguint_le(&record.pky)?;
    let sigx = hex_to_biguint_le(&record.sigx)?;
    let sigy = hex_to_biguint_le(&record.sigy)?;
    let sigr = hex_to_biguint_le(&record.sigr)?;
    Ok(verify_parts(ctx, &digest, &pkx, &pky, &sigx, &sigy, &sigr))
}

pub(crate) fn hex_at_width(value: &BigUint, width: usize) -> String {
    biguint_to_hex_le(value, width)
}
