//! Concrete backend over the in-workspace curve crate.

use num_bigint::BigUint;
use rand::RngCore;

use curve::{Affine, BaseField, ScalarField, sponge_hash};

use crate::primitives::CurveBackend;

/// Baby Jubjub backend: the conformance implementation of
/// [`CurveBackend`].
///
/// Field and scalar values serialize at 32 bytes, the width of the BN254
/// scalar field.
#[derive(Debug, Default, Clone, Copy)]
pub struct JubjubBackend;

impl CurveBackend for JubjubBackend {
    type Point = Affine;
    type Scalar = ScalarField;
    type Field = BaseField;

    fn element_width(&self) -> usize {
        32
    }

    fn base_point(&self) -> Affine {
        Affine::generator()
    }

    fn identity(&self) -> Affine {
        Affine::identity()
    }

    fn is_identity(&self, p: &Affine) -> bool {
        p.is_identity()
    }

    fn add(&self, a: &Affine, b: &Affine) -> Affine {
        a.add(b)
    }

    fn scalar_mul(&self, p: &Affine, k: &ScalarField) -> Affine {
        p.scalar_mul(k)
    }

    fn negate(&self, p: &Affine) -> Affine {
        p.negate()
    }

    fn point_from_coords(&self, x: &BigUint, y: &BigUint) -> Affine {
        Affine::new(BaseField::from_biguint(x), BaseField::from_biguint(y))
    }

    fn coords(&self, p: &Affine) -> (BigUint, BigUint) {
        (p.x.to_biguint(), p.y.to_biguint())
    }

    fn scalar_from_decimal(&self, value: &str) -> Option<ScalarField> {
        ScalarField::from_decimal(value)
    }

    fn scalar_from_biguint(&self, value: &BigUint) -> ScalarField {
        ScalarField::from_biguint(value)
    }

    fn scalar_to_biguint(&self, k: &ScalarField) -> BigUint {
        k.to_biguint()
    }

    fn scalar_add(&self, a: &ScalarField, b: &ScalarField) -> ScalarField {
        a + b
    }

    fn scalar_mul_scalar(&self, a: &ScalarField, b: &ScalarField) -> ScalarField {
        a * b
    }

    fn random_scalar(&self, rng: &mut dyn RngCore) -> ScalarField {
        ScalarField::random(rng)
    }

    fn field_from_biguint(&self, value: &BigUint) -> BaseField {
        BaseField::from_biguint(value)
    }

    fn field_to_biguint(&self, e: &BaseField) -> BigUint {
        e.to_biguint()
    }

    fn sponge(&self, inputs: &[BaseField]) -> BaseField {
        sponge_hash(inputs)
    }
}
