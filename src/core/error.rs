/*!
Error handling for the PQC adapter.

Failures fall into three groups: no candidate algorithm could be resolved,
the underlying primitive reported failure, or the caller broke a buffer
contract. Signature rejection is not an error; see [`Verdict`](crate::Verdict).
*/

use std::fmt;
use thiserror::Error;

use crate::core::crypto::types::algorithms::Role;

/// Result type for the PQC adapter
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the PQC adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// None of the candidate identifiers for a role could be instantiated
    #[error("No supported {role} algorithm available (tried: {})", .tried.join(", "))]
    Unavailable {
        role: Role,
        tried: Vec<String>,
    },

    /// The underlying primitive reported failure
    #[error("Cryptographic operation failed")]
    Primitive(#[source] PrimitiveError),

    /// An output buffer cannot hold the result
    #[error("{what} buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall {
        what: BufferKind,
        required: usize,
        actual: usize,
    },

    /// An input buffer does not match the resolved algorithm's length
    #[error("{what} length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        what: BufferKind,
        expected: usize,
        actual: usize,
    },

    /// Invalid adapter configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Primitive failures with limited details to prevent leaking information
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Key pair generation failed
    #[error("Key generation failed")]
    KeyGeneration,

    /// Encapsulation failed
    #[error("Encapsulation failed")]
    Encapsulation,

    /// Decapsulation failed
    #[error("Decapsulation failed")]
    Decapsulation,

    /// Signing failed
    #[error("Signing failed")]
    Signing,

    /// The library rejected the encoding of a key, ciphertext or signature
    #[error("Malformed input")]
    MalformedInput,
}

/// Names the buffer involved in a caller-contract violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    PublicKey,
    SecretKey,
    Ciphertext,
    SessionKey,
    Signature,
    Name,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferKind::PublicKey => "Public key",
            BufferKind::SecretKey => "Secret key",
            BufferKind::Ciphertext => "Ciphertext",
            BufferKind::SessionKey => "Session key",
            BufferKind::Signature => "Signature",
            BufferKind::Name => "Name",
        };
        f.write_str(name)
    }
}

/// Integer result codes shared with C callers
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success = 0,
    /// Primitive failure, or a signature that did not verify
    Failure = 1,
    /// Null pointer or undersized buffer
    BadArgument = 2,
    /// No candidate algorithm is installed
    Unavailable = 3,
}

impl Error {
    /// Result code reported for this error across the C boundary
    pub fn code(&self) -> ResultCode {
        match self {
            Error::Unavailable { .. } => ResultCode::Unavailable,
            Error::Primitive(_) => ResultCode::Failure,
            Error::BufferTooSmall { .. }
            | Error::LengthMismatch { .. }
            | Error::InvalidConfig(_) => ResultCode::BadArgument,
        }
    }

    /// Whether retrying against a different library installation could help
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::Unavailable { .. })
    }
}

impl From<PrimitiveError> for Error {
    fn from(error: PrimitiveError) -> Self {
        Error::Primitive(error)
    }
}

/// Fails with [`Error::BufferTooSmall`] unless `actual >= required`
pub(crate) fn ensure_capacity(what: BufferKind, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(Error::BufferTooSmall { what, required, actual });
    }
    Ok(())
}

/// Fails with [`Error::LengthMismatch`] unless `actual == expected`
pub(crate) fn ensure_length(what: BufferKind, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::LengthMismatch { what, expected, actual });
    }
    Ok(())
}
