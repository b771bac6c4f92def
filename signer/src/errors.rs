//! Error types for signing and verification.

use thiserror::Error;

/// Errors raised when producing or checking signatures.
///
/// A failed cryptographic check is never an error: verification reports it
/// as a plain `false`. These variants cover malformed inputs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    /// The private key string did not parse as a decimal scalar.
    #[error("private key is not a valid decimal scalar")]
    InvalidKeyMaterial,

    /// A serialized signature field failed hex parsing.
    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}
