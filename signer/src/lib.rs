//! Schnorr-style command signing over an injected curve backend.
//!
//! This crate turns a packed command limb sequence into an authenticated,
//! replay-protected signature record and checks such records against a
//! public key:
//!
//! - the limb sequence folds into field elements (groups of three limbs per
//!   element) and a sponge hash yields the Fiat-Shamir challenge `H`;
//! - the signature is `(R, s)` with `R = r·G` and `s = r + sk·H`;
//! - verification checks `s·G == R + H·P` through the identity test
//!   `s·G + (−(R + H·P)) == O`.
//!
//! All curve and sponge operations go through [`CurveBackend`], so the
//! protocol runs unchanged over the in-workspace Baby Jubjub conformance
//! backend ([`JubjubBackend`]), a deployment's production primitives, or a
//! trivial mock group in tests.
//!
//! # Example
//!
//! ```
//! use signer::{JubjubBackend, SigningKey, verify_record};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let ctx = JubjubBackend;
//! let mut rng = StdRng::seed_from_u64(42);
//! let key = SigningKey::from_decimal(&ctx, "1234567890").expect("key");
//!
//! let cmd = codec::Command::new(5, 3, vec![10, 20]).expect("command");
//! let record = key.sign(&ctx, &mut rng, &cmd.encode());
//!
//! assert!(verify_record(&ctx, &record).expect("well-formed record"));
//! ```

mod backend;
mod convention;
mod errors;
mod keys;
mod primitives;
mod signatures;

#[cfg(test)]
mod tests;

pub use backend::JubjubBackend;
pub use convention::{ClientError, PlayerConvention, Transport};
pub use errors::SignError;
pub use keys::{SigningKey, VerifyingKey, query_pkx};
pub use primitives::CurveBackend;
pub use signatures::{SignatureRecord, verify_parts, verify_record};
