//! The algebraic interface the signing protocol consumes.

use core::fmt::Debug;

use num_bigint::BigUint;
use rand::RngCore;

/// Operations the signing and verification logic needs from an elliptic
/// curve backend and its companion sponge hash.
///
/// The protocol layer is written entirely against this trait, so it can run
/// over a deployment's production curve, the in-workspace conformance
/// backend, or a trivial group in unit tests. Integers cross the boundary as
/// `BigUint`; the backend owns reduction into its own representations.
///
/// Contract highlights:
/// - the group is abelian with a distinguished base point;
/// - [`negate`](CurveBackend::negate) flips the sign of a point under the
///   curve's x-coordinate convention, so `p + negate(p)` is the identity;
/// - [`sponge`](CurveBackend::sponge) is a fixed, versioned function; any
///   change to it breaks all existing signatures.
pub trait CurveBackend {
    type Point: Clone + PartialEq + Debug;
    type Scalar: Clone + PartialEq + Debug;
    type Field: Clone + PartialEq + Debug;

    /// Byte width used when serializing field and scalar values as
    /// little-endian hex. Fixed per backend so verifiers parse unambiguously.
    fn element_width(&self) -> usize;

    fn base_point(&self) -> Self::Point;
    fn identity(&self) -> Self::Point;
    fn is_identity(&self, p: &Self::Point) -> bool;
    fn add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point;
    fn scalar_mul(&self, p: &Self::Point, k: &Self::Scalar) -> Self::Point;
    fn negate(&self, p: &Self::Point) -> Self::Point;
    fn point_from_coords(&self, x: &BigUint, y: &BigUint) -> Self::Point;
    fn coords(&self, p: &Self::Point) -> (BigUint, BigUint);

    /// Parses a decimal private-key string. `None` for non-numeric input.
    fn scalar_from_decimal(&self, value: &str) -> Option<Self::Scalar>;
    fn scalar_from_biguint(&self, value: &BigUint) -> Self::Scalar;
    fn scalar_to_biguint(&self, k: &Self::Scalar) -> BigUint;
    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;
    fn scalar_mul_scalar(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;
    /// Fresh unpredictable scalar for ephemeral signing nonces.
    fn random_scalar(&self, rng: &mut dyn RngCore) -> Self::Scalar;

    fn field_from_biguint(&self, value: &BigUint) -> Self::Field;
    fn field_to_biguint(&self, e: &Self::Field) -> BigUint;
    /// The fixed sponge hash: an ordered sequence of field elements in, one
    /// field element out.
    fn sponge(&self, inputs: &[Self::Field]) -> Self::Field;
}
