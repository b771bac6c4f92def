//! Fixed sponge hash over the base field.
//!
//! An x^5 MiMC-style sponge: the state absorbs one field element per
//! permutation call and the final state is the digest. Round constants are
//! derived once from a Keccak-256 chain over a versioned seed string.
//!
//! This function is part of the signature format. Changing the seed, the
//! round count or the absorb order invalidates every signature ever
//! produced, so all three are frozen; a new construction means a new seed
//! version.

use std::sync::OnceLock;

use num_bigint::BigUint;
use sha3::{Digest, Keccak256};

use crate::basefield::BaseField;

const ROUNDS: usize = 110;
const SEED: &str = "limb-digest-sponge-v1";

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn round_constants() -> &'static [BaseField] {
    static CONSTANTS: OnceLock<Vec<BaseField>> = OnceLock::new();
    CONSTANTS.get_or_init(|| {
        let mut digest = keccak256(SEED.as_bytes());
        let mut constants = Vec::with_capacity(ROUNDS);
        for _ in 0..ROUNDS {
            digest = keccak256(&digest);
            constants.push(BaseField::from_biguint(&BigUint::from_bytes_be(&digest)));
        }
        constants
    })
}

fn permute(input: &BaseField) -> BaseField {
    let mut state = input.clone();
    for constant in round_constants() {
        let t = &state + constant;
        let t2 = t.square();
        let t4 = t2.square();
        state = &t4 * &t;
    }
    state
}

/// Hashes an ordered sequence of field elements into one field element.
pub fn sponge_hash(inputs: &[BaseField]) -> BaseField {
    let mut state = BaseField::zero();
    for element in inputs {
        state = permute(&(&state + element));
    }
    state
}
