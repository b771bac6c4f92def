//! Error types for the packing and conversion routines.

use thiserror::Error;

/// Errors raised by the codec layer.
///
/// Every variant is a precondition violation at the caller boundary; no
/// function produces partial output alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input string is not valid hexadecimal for the requested
    /// interpretation. Little-endian parsing also rejects odd-length input,
    /// since zero-padding a little-endian string would prepend a low-order
    /// byte and silently change the value.
    #[error("malformed hex input: {0}")]
    MalformedHex(String),

    /// A value does not fit the width required by the target layout.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    /// A withdraw amount does not fit the 32-bit slot of the first packed
    /// limb. Packing anyway would corrupt the top bits of the address.
    #[error("withdraw amount {0} exceeds 32 bits")]
    AmountOverflow(u64),

    /// The nonce or parameter count of a command overflows its header field.
    #[error("invalid command shape: {0}")]
    InvalidCommandShape(String),
}
