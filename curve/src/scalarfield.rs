//! Scalar field of the prime-order subgroup.
//! r = 2736030358979909402780800718157159386076813972158567259200215660948447373041
//!
//! Private keys, ephemeral nonces and signature scalars live here. Like the
//! base field, elements are canonically reduced `BigUint`s.

use core::ops::{Add, Mul};
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;
use serde::{Deserialize, Serialize};

const ORDER_DEC: &str =
    "2736030358979909402780800718157159386076813972158567259200215660948447373041";

pub(crate) fn order() -> &'static BigUint {
    static ORDER: OnceLock<BigUint> = OnceLock::new();
    ORDER.get_or_init(|| ORDER_DEC.parse().expect("order literal"))
}

/// Scalar modulo the subgroup order, canonically reduced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarField(BigUint);

impl ScalarField {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        Self(value % order())
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_biguint(&BigUint::from(value))
    }

    /// Parses a decimal private-key literal. Returns `None` for anything
    /// that is not an unsigned decimal integer.
    pub fn from_decimal(value: &str) -> Option<Self> {
        value.parse::<BigUint>().ok().map(|v| Self::from_biguint(&v))
    }

    pub fn to_biguint(&self) -> BigUint {
        self.0.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Samples a uniformly distributed scalar.
    ///
    /// Draws 64 bytes (twice the order width) so the modular reduction bias
    /// is negligible. Takes `dyn RngCore` so scalar sources stay injectable
    /// through object-safe interfaces.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        Self::from_biguint(&BigUint::from_bytes_le(&buf))
    }
}

impl Add for &ScalarField {
    type Output = ScalarField;

    fn add(self, rhs: Self) -> ScalarField {
        ScalarField((&self.0 + &rhs.0) % order())
    }
}

impl Mul for &ScalarField {
    type Output = ScalarField;

    fn mul(self, rhs: Self) -> ScalarField {
        ScalarField((&self.0 * &rhs.0) % order())
    }
}
