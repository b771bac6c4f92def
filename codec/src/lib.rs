//! Bit-exact packing layer for authenticated application commands.
//!
//! This crate owns every byte- and limb-level layout rule shared between the
//! client, the verifier and the on-chain decoder:
//!
//! - conversion between hex strings, arbitrary-precision integers and
//!   little-endian 64-bit limb arrays (the on-wire atom);
//! - packing of a logical command (nonce, opcode, params) into a canonical
//!   limb sequence with a single 64-bit header limb;
//! - the withdraw codecs: a 3-limb packed form for submission and an
//!   independent 32-byte record form for decoding raw transaction bytes;
//! - the digest reducer that folds a limb sequence into 192-bit groups fed to
//!   the signature challenge hash.
//!
//! All intermediate values are carried as `num_bigint::BigUint` so no width
//! narrower than the final layout ever appears in a conversion. Every
//! function here is pure and deterministic.

mod address;
mod command;
mod digest;
mod errors;
mod hexnum;
mod limbs;
mod withdraw;

pub use address::{keccak256, to_checksum_address};
pub use command::{Command, MAX_PARAMS, NONCE_BITS};
pub use digest::{reduce, LimbDigest};
pub use errors::CodecError;
pub use hexnum::{
    biguint_to_hex_le, bytes_to_decimal_string, bytes_to_hex, hex_to_biguint_be,
    hex_to_biguint_le, LeHexNum,
};
pub use limbs::{biguint_from_limbs_le, biguint_to_limbs_le, biguint_to_limbs_le_checked};
pub use withdraw::{
    compose_withdraw_limbs, decode_withdraw, WithdrawRecord, WEI_PER_TOKEN_EXP,
    WITHDRAW_RECORD_BYTES,
};
