//! Withdraw request codecs.
//!
//! Two deliberately different layouts coexist and must both stay bit-exact:
//!
//! - the 3-limb packed form produced by [`compose_withdraw_limbs`], used as
//!   on-chain call arguments when submitting a withdraw command;
//! - the flat 32-byte record form consumed by [`decode_withdraw`], used when
//!   decoding raw transaction bytes from chain logs.
//!
//! The two are not inverses of each other; round-trips must go through the
//! explicit record layout.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::address::to_checksum_address;
use crate::errors::CodecError;

/// Length of one record in the flat decode layout.
pub const WITHDRAW_RECORD_BYTES: usize = 32;

/// Decimal exponent of the fixed-point amount scaling (wei per token).
///
/// The decode path multiplies amounts by `10^WEI_PER_TOKEN_EXP`. Tokens with
/// a different decimal count are not supported by this layout.
pub const WEI_PER_TOKEN_EXP: u32 = 18;

fn wei_per_token() -> BigUint {
    BigUint::from(10u32).pow(WEI_PER_TOKEN_EXP)
}

fn read_u64_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | ((b as u64) << (8 * i)))
}

/// Packs a 160-bit address and an amount into the 3-limb submission form.
///
/// The big-endian 20-byte address splits into groups of 4, 8 and 8 bytes;
/// each group is read as a little-endian integer (a per-group byte reversal,
/// which converts group-wise endianness without disturbing group order). The
/// amount occupies the low 32 bits of the first limb:
///
/// ```text
/// limb 0: (address bytes 0..4  as LE u32) << 32 | amount
/// limb 1:  address bytes 4..12 as LE u64
/// limb 2:  address bytes 12..20 as LE u64
/// ```
///
/// Fails with [`CodecError::AmountOverflow`] when the amount does not fit 32
/// bits and with [`CodecError::ValueOutOfRange`] when the address exceeds 160
/// bits.
pub fn compose_withdraw_limbs(address: &BigUint, amount: u64) -> Result<[u64; 3], CodecError> {
    if amount >> 32 != 0 {
        return Err(CodecError::AmountOverflow(amount));
    }
    if address.bits() > 160 {
        return Err(CodecError::ValueOutOfRange(format!(
            "address of {} bits exceeds 160",
            address.bits()
        )));
    }

    let be = address.to_bytes_be();
    let mut addr = [0u8; 20];
    addr[20 - be.len()..].copy_from_slice(&be);

    let first = read_u64_le(&addr[0..4]);
    let snd = read_u64_le(&addr[4..12]);
    let third = read_u64_le(&addr[12..20]);

    Ok([(first << 32) | amount, snd, third])
}

/// One decoded withdraw record from raw transaction bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRecord {
    pub op: u8,
    pub index: u8,
    /// Checksummed destination address.
    pub address: String,
    /// Wei-scale amount (token units times `10^WEI_PER_TOKEN_EXP`).
    pub amount: BigUint,
}

/// Decodes a raw transaction byte buffer into withdraw records.
///
/// The buffer is a sequence of 32-byte records: bytes `[0, 4)` hold the
/// opcode and index (the trailing two bytes are reserved), bytes `[4, 24)`
/// the big-endian address and bytes `[24, 32)` the big-endian token amount,
/// which is scaled to wei.
///
/// A buffer shorter than 2 bytes decodes to an empty sequence. Any other
/// length that is not a multiple of 32 is rejected rather than silently
/// truncated.
pub fn decode_withdraw(txdata: &[u8]) -> Result<Vec<WithdrawRecord>, CodecError> {
    if txdata.len() < 2 {
        return Ok(Vec::new());
    }
    if txdata.len() % WITHDRAW_RECORD_BYTES != 0 {
        return Err(CodecError::ValueOutOfRange(format!(
            "withdraw buffer of {} bytes is not a multiple of {WITHDRAW_RECORD_BYTES}",
            txdata.len()
        )));
    }

    let scale = wei_per_token();
    let records = txdata
        .chunks_exact(WITHDRAW_RECORD_BYTES)
        .map(|chunk| {
            let mut addr = [0u8; 20];
            addr.copy_from_slice(&chunk[4..24]);
            WithdrawRecord {
                op: chunk[0],
                index: chunk[1],
                address: to_checksum_address(&addr),
                amount: BigUint::from_bytes_be(&chunk[24..32]) * &scale,
            }
        })
        .collect();
    Ok(records)
}
