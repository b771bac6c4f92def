//! Base field of the curve: integers modulo
//! p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//! (the BN254 scalar field, over which the embedded curve is defined).
//!
//! Elements are kept in canonical reduced form on a single
//! arbitrary-precision integer. Arithmetic is implemented on references so
//! expressions never clone more than they must.

use core::ops::{Add, Mul, Neg, Sub};
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

const MODULUS_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

pub(crate) fn modulus() -> &'static BigUint {
    static MODULUS: OnceLock<BigUint> = OnceLock::new();
    MODULUS.get_or_init(|| MODULUS_DEC.parse().expect("modulus literal"))
}

/// Element of the base field, canonically reduced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseField(BigUint);

impl BaseField {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// Reduces an arbitrary non-negative integer into the field.
    pub fn from_biguint(value: &BigUint) -> Self {
        Self(value % modulus())
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_biguint(&BigUint::from(value))
    }

    /// Parses a decimal literal, reducing modulo p.
    pub fn from_decimal(value: &str) -> Option<Self> {
        value.parse::<BigUint>().ok().map(|v| Self::from_biguint(&v))
    }

    pub fn to_biguint(&self) -> BigUint {
        self.0.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Multiplicative inverse by Fermat's little theorem.
    ///
    /// The inverse of zero is zero; callers that can feed zero must guard.
    pub fn inverse(&self) -> Self {
        Self(self.0.modpow(&(modulus() - 2u32), modulus()))
    }
}

impl Add for &BaseField {
    type Output = BaseField;

    fn add(self, rhs: Self) -> BaseField {
        BaseField((&self.0 + &rhs.0) % modulus())
    }
}

impl Sub for &BaseField {
    type Output = BaseField;

    fn sub(self, rhs: Self) -> BaseField {
        BaseField((&self.0 + modulus() - &rhs.0) % modulus())
    }
}

impl Mul for &BaseField {
    type Output = BaseField;

    fn mul(self, rhs: Self) -> BaseField {
        BaseField((&self.0 * &rhs.0) % modulus())
    }
}

impl Neg for &BaseField {
    type Output = BaseField;

    fn neg(self) -> BaseField {
        if self.0.is_zero() {
            BaseField::zero()
        } else {
            BaseField(modulus() - &self.0)
        }
    }
}
