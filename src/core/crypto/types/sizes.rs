/*!
Buffer-size reports for resolved algorithms.
*/

use crate::core::constants::{LENGTH_SENTINEL, SESSION_KEY_LEN};
use crate::core::error::Result;

/// Lengths of the resolved KEM, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct KemSizes {
    pub public_key: usize,
    pub secret_key: usize,
    pub ciphertext: usize,
    pub session_key: usize,
}

impl KemSizes {
    pub(crate) fn new(public_key: usize, secret_key: usize, ciphertext: usize) -> Self {
        Self {
            public_key,
            secret_key,
            ciphertext,
            session_key: SESSION_KEY_LEN,
        }
    }
}

/// Lengths of the resolved signature scheme, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureSizes {
    pub public_key: usize,
    pub secret_key: usize,
    pub max_signature: usize,
}

/// Collapse a length query into the C convention: the length, or -1.
///
/// Lengths that do not fit in an `i32` are reported as the sentinel too,
/// so a negative value is never a valid length.
pub fn length_or_sentinel(length: Result<usize>) -> i32 {
    match length {
        Ok(len) => i32::try_from(len).unwrap_or(LENGTH_SENTINEL),
        Err(_) => LENGTH_SENTINEL,
    }
}
