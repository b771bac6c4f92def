//! Signing and verifying keys, generic over the curve backend.

use rand::RngCore;

use crate::errors::SignError;
use crate::primitives::CurveBackend;
use crate::signatures::{SignatureRecord, challenge, hex_at_width};

/// A secret signing key: a private scalar in the backend's scalar field.
///
/// Parsed from the caller's decimal key string and held only for the
/// lifetime of the value; never persisted by this crate.
pub struct SigningKey<C: CurveBackend> {
    scalar: C::Scalar,
}

/// A public verifying key: the signer's point on the curve.
pub struct VerifyingKey<C: CurveBackend> {
    point: C::Point,
}

impl<C: CurveBackend> Clone for SigningKey<C> {
    fn clone(&self) -> Self {
        Self {
            scalar: self.scalar.clone(),
        }
    }
}

impl<C: CurveBackend> Clone for VerifyingKey<C> {
    fn clone(&self) -> Self {
        Self {
            point: self.point.clone(),
        }
    }
}

impl<C: CurveBackend> SigningKey<C> {
    /// Parses a decimal private-key string.
    ///
    /// Anything that is not an unsigned decimal integer fails with
    /// [`SignError::InvalidKeyMaterial`]; signing never proceeds on
    /// malformed key material.
    pub fn from_decimal(ctx: &C, key: &str) -> Result<Self, SignError> {
        ctx.scalar_from_decimal(key)
            .map(|scalar| Self { scalar })
            .ok_or(SignError::InvalidKeyMaterial)
    }

    /// Generates a random signing key.
    pub fn random<R: RngCore>(ctx: &C, rng: &mut R) -> Self {
        Self {
            scalar: ctx.random_scalar(rng),
        }
    }

    /// Derives the public verifying key `sk·G`.
    pub fn verifying_key(&self, ctx: &C) -> VerifyingKey<C> {
        VerifyingKey {
            point: ctx.scalar_mul(&ctx.base_point(), &self.scalar),
        }
    }

    /// Signs a limb sequence with a freshly drawn ephemeral scalar.
    ///
    /// The ephemeral scalar must be unpredictable and never reused; callers
    /// pass a cryptographically secure generator. For reproducible output
    /// use [`sign_with_nonce`](Self::sign_with_nonce).
    pub fn sign<R: RngCore>(&self, ctx: &C, rng: &mut R, limbs: &[u64]) -> SignatureRecord {
        let nonce = ctx.random_scalar(rng);
        self.sign_with_nonce(ctx, &nonce, limbs)
    }

    /// Signs a limb sequence with a caller-supplied ephemeral scalar.
    ///
    /// For fixed inputs and a fixed ephemeral scalar the output is
    /// bit-for-bit reproducible:
    ///
    /// 1. `R = r·G` commits to the ephemeral scalar;
    /// 2. the limb sequence folds into field elements and the sponge hash
    ///    yields the challenge `H`;
    /// 3. the response is `s = r + sk·H` in the scalar field.
    ///
    /// The record carries the raw folded message, the challenge, the public
    /// key, `R` and `s`, all as little-endian hex.
    pub fn sign_with_nonce(&self, ctx: &C, nonce: &C::Scalar, limbs: &[u64]) -> SignatureRecord {
        let (hash, folded) = challenge(ctx, limbs);
        let h = ctx.scalar_from_biguint(&ctx.field_to_biguint(&hash));

        let r_point = ctx.scalar_mul(&ctx.base_point(), nonce);
        let s = ctx.scalar_add(nonce, &ctx.scalar_mul_scalar(&self.scalar, &h));
        let pk = self.verifying_key(ctx);

        let width = ctx.element_width();
        let (pkx, pky) = ctx.coords(&pk.point);
        let (sigx, sigy) = ctx.coords(&r_point);

        SignatureRecord {
            msg: hex_at_width(&folded, limbs.len() * 8),
            hash: hex_at_width(&ctx.field_to_biguint(&hash), width),
            pkx: hex_at_width(&pkx, width),
            pky: hex_at_width(&pky, width),
            sigx: hex_at_width(&sigx, width),
            sigy: hex_at_width(&sigy, width),
            sigr: hex_at_width(&ctx.scalar_to_biguint(&s), width),
        }
    }
}

impl<C: CurveBackend> VerifyingKey<C> {
    pub fn point(&self) -> &C::Point {
        &self.point
    }

    /// The key's coordinates as little-endian hex at the backend width.
    pub fn to_hex(&self, ctx: &C) -> (String, String) {
        let width = ctx.element_width();
        let (x, y) = ctx.coords(&self.point);
        (hex_at_width(&x, width), hex_at_width(&y, width))
    }
}

/// Derives the serialized public-key x-coordinate for a decimal private key
/// without signing anything.
pub fn query_pkx<C: CurveBackend>(ctx: &C, key: &str) -> Result<String, SignError> {
    let sk = SigningKey::from_decimal(ctx, key)?;
    let (pkx, _) = sk.verifying_key(ctx).to_hex(ctx);
    Ok(pkx)
}
