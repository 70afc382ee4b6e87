/*!
Implementations of cryptographic algorithms.

This module provides pqcrypto-backed instances of the KEM and signature
interfaces.
*/

// Key encapsulation algorithms
pub mod kem;

// Signature algorithms
pub mod signatures;

pub use kem::Kyber512Kem;
pub use signatures::Dilithium2Signature;

use crate::core::error::PrimitiveError;

/// Copy `src` into `dst`, failing with `err` unless the lengths agree
pub(crate) fn copy_exact(dst: &mut [u8], src: &[u8], err: PrimitiveError) -> Result<(), PrimitiveError> {
    if dst.len() != src.len() {
        return Err(err);
    }
    dst.copy_from_slice(src);
    Ok(())
}
