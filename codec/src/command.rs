//! Canonical limb encoding of application commands.

use serde::{Deserialize, Serialize};

use crate::errors::CodecError;

/// Number of bits available for the nonce in the header limb.
pub const NONCE_BITS: u32 = 48;

/// Maximum number of parameter limbs a command may carry.
///
/// The header stores `params.len() + 1` in one byte, so 254 is the most the
/// count field can express.
pub const MAX_PARAMS: usize = 254;

/// A logical command: nonce, opcode and parameter limbs.
///
/// Constructed once per outgoing request and consumed by [`Command::encode`];
/// never persisted. The encoded form is a single header limb
/// `(nonce << 16) | ((params.len() + 1) << 8) | opcode` followed by the
/// parameters in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    nonce: u64,
    opcode: u8,
    params: Vec<u64>,
}

impl Command {
    /// Builds a command, validating the header preconditions.
    ///
    /// The nonce must fit in 48 bits so the shifted header stays within one
    /// limb, and the parameter list is capped at [`MAX_PARAMS`]. Violations
    /// are caller errors; nothing is clamped or wrapped.
    pub fn new(nonce: u64, opcode: u8, params: Vec<u64>) -> Result<Self, CodecError> {
        if nonce >> NONCE_BITS != 0 {
            return Err(CodecError::InvalidCommandShape(format!(
                "nonce {nonce} exceeds {NONCE_BITS} bits"
            )));
        }
        if params.len() > MAX_PARAMS {
            return Err(CodecError::InvalidCommandShape(format!(
                "{} params exceed the limit of {MAX_PARAMS}",
                params.len()
            )));
        }
        Ok(Self {
            nonce,
            opcode,
            params,
        })
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn params(&self) -> &[u64] {
        &self.params
    }

    /// The packed header limb.
    pub fn header(&self) -> u64 {
        (self.nonce << 16) | ((self.params.len() as u64 + 1) << 8) | self.opcode as u64
    }

    /// Encodes the command as its canonical limb sequence.
    pub fn encode(&self) -> Vec<u64> {
        let mut limbs = Vec::with_capacity(1 + self.params.len());
        limbs.push(self.header());
        limbs.extend_from_slice(&self.params);
        limbs
    }
}
