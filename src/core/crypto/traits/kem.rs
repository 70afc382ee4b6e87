/*!
Traits for key encapsulation instances.

This module defines the interface a KEM backend exposes to the adapter.
*/

use crate::core::error::PrimitiveError;

/// A live KEM instance bound to one resolved identifier.
///
/// Buffers passed to the operations are exactly the lengths the instance
/// reports; the adapter slices caller buffers before calling in.
pub trait KemInstance: Send {
    /// Name the library reports for this algorithm
    fn method_name(&self) -> &str;

    /// Public key size for this algorithm
    fn length_public_key(&self) -> usize;

    /// Secret key size for this algorithm
    fn length_secret_key(&self) -> usize;

    /// Ciphertext size for this algorithm
    fn length_ciphertext(&self) -> usize;

    /// Shared secret size for this algorithm
    fn length_shared_secret(&self) -> usize;

    /// Generate a key pair
    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<(), PrimitiveError>;

    /// Encapsulate a fresh shared secret to `public_key` (sender side)
    fn encapsulate(
        &self,
        ciphertext: &mut [u8],
        shared_secret: &mut [u8],
        public_key: &[u8],
    ) -> Result<(), PrimitiveError>;

    /// Recover the shared secret from `ciphertext` (receiver side)
    fn decapsulate(
        &self,
        shared_secret: &mut [u8],
        ciphertext: &[u8],
        secret_key: &[u8],
    ) -> Result<(), PrimitiveError>;
}
