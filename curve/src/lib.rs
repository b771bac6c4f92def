//! Embedded elliptic curve and sponge hash for the command signing layer.
//!
//! This crate provides the concrete algebraic backend: the BN254-Fr base
//! field, the Baby Jubjub twisted Edwards group, the scalar field of its
//! prime-order subgroup, and a fixed sponge hash over the base field. The
//! signing protocol consumes these through a backend trait, so this crate
//! stays free of any protocol or layout knowledge.

mod affine;
mod basefield;
mod scalarfield;
mod sponge;

pub use affine::Affine;
pub use basefield::BaseField;
pub use scalarfield::ScalarField;
pub use sponge::sponge_hash;
