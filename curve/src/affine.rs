// Baby Jubjub, a twisted Edwards curve over the BN254 scalar field:
//   168700*x^2 + y^2 = 1 + 168696*x^2*y^2  (mod p)
// Prime-order subgroup: r = 2736030358979909402780800718157159386076813972158567259200215660948447373041
// Cofactor: 8
// Generator of the prime-order subgroup:
//   (5299619240641551281634865583518297030282874472190772894086521144482721001553 :
//    16950150798460657717958625567821834550301663161624707787222815936182638968203 : 1)
// The Edwards addition law below is complete on this curve (a is a square,
// d is not), so a single formula covers doubling and the identity.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::basefield::BaseField;
use crate::scalarfield::ScalarField;

const COEFF_A: u64 = 168700;
const COEFF_D: u64 = 168696;

const GENERATOR_X_DEC: &str =
    "5299619240641551281634865583518297030282874472190772894086521144482721001553";
const GENERATOR_Y_DEC: &str =
    "16950150798460657717958625567821834550301663161624707787222815936182638968203";

fn coeff_a() -> &'static BaseField {
    static A: OnceLock<BaseField> = OnceLock::new();
    A.get_or_init(|| BaseField::from_u64(COEFF_A))
}

fn coeff_d() -> &'static BaseField {
    static D: OnceLock<BaseField> = OnceLock::new();
    D.get_or_init(|| BaseField::from_u64(COEFF_D))
}

fn generator() -> &'static Affine {
    static G: OnceLock<Affine> = OnceLock::new();
    G.get_or_init(|| {
        let x = BaseField::from_decimal(GENERATOR_X_DEC).expect("generator x literal");
        let y = BaseField::from_decimal(GENERATOR_Y_DEC).expect("generator y literal");
        Affine::new(x, y)
    })
}

/// Affine point on the twisted Edwards curve.
///
/// The identity element is (0, 1); negation flips the x-coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    pub x: BaseField,
    pub y: BaseField,
}

impl Affine {
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine { x, y }
    }

    /// The identity element (0, 1).
    pub fn identity() -> Self {
        Affine {
            x: BaseField::zero(),
            y: BaseField::one(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == BaseField::one()
    }

    /// Generator of the prime-order subgroup.
    pub fn generator() -> Self {
        generator().clone()
    }

    /// Check the curve equation a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = &(coeff_a() * &x2) + &y2;
        let rhs = &BaseField::one() + &(&(coeff_d() * &x2) * &y2);
        lhs == rhs
    }

    /// Complete twisted Edwards addition.
    pub fn add(&self, other: &Affine) -> Affine {
        let x1x2 = &self.x * &other.x;
        let y1y2 = &self.y * &other.y;
        let x1y2 = &self.x * &other.y;
        let y1x2 = &self.y * &other.x;
        let dxy = &(coeff_d() * &x1x2) * &y1y2;

        let one = BaseField::one();
        let x3 = &(&x1y2 + &y1x2) * &(&one + &dxy).inverse();
        let y3 = &(&y1y2 - &(coeff_a() * &x1x2)) * &(&one - &dxy).inverse();
        Affine { x: x3, y: y3 }
    }

    pub fn double(&self) -> Affine {
        self.add(self)
    }

    /// Point negation: (x, y) -> (-x, y).
    pub fn negate(&self) -> Affine {
        Affine {
            x: -&self.x,
            y: self.y.clone(),
        }
    }

    /// Double-and-add scalar multiplication over the scalar's 64-bit limbs.
    pub fn scalar_mul(&self, scalar: &ScalarField) -> Affine {
        let mut result = Affine::identity();
        let mut temp = self.clone();

        for &limb in scalar.to_biguint().to_u64_digits().iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result.add(&temp);
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    /// Multiplies the subgroup generator by a scalar.
    pub fn mul_generator(scalar: &ScalarField) -> Affine {
        Self::generator().scalar_mul(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalarfield::order;
    use num_bigint::BigUint;

    #[test]
    fn generator_satisfies_curve_equation() {
        assert!(Affine::generator().is_on_curve());
        assert!(Affine::identity().is_on_curve());
    }

    #[test]
    fn identity_is_neutral() {
        let g = Affine::generator();
        assert_eq!(g.add(&Affine::identity()), g);
        assert_eq!(Affine::identity().add(&g), g);
    }

    #[test]
    fn negation_gives_inverse() {
        let g = Affine::generator();
        assert!(g.add(&g.negate()).is_identity());
    }

    #[test]
    fn doubling_matches_addition() {
        let g = Affine::generator();
        assert_eq!(g.double(), g.add(&g));
        assert!(g.double().is_on_curve());
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let g = Affine::generator();
        let five = g.add(&g).add(&g).add(&g).add(&g);
        assert_eq!(g.scalar_mul(&ScalarField::from_u64(5)), five);
    }

    #[test]
    fn scalar_mul_distributes() {
        let g = Affine::generator();
        let a = ScalarField::from_u64(11);
        let b = ScalarField::from_u64(31);
        let lhs = g.scalar_mul(&a).add(&g.scalar_mul(&b));
        let rhs = g.scalar_mul(&(&a + &b));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn generator_has_subgroup_order() {
        // order * G wraps to the identity; order - 1 does not.
        let g = Affine::generator();
        let almost = ScalarField::from_biguint(&(order() - BigUint::from(1u32)));
        let near = g.scalar_mul(&almost);
        assert!(!near.is_identity());
        assert!(near.add(&g).is_identity());
    }
}
