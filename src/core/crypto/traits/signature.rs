/*!
Traits for signature instances.

This module defines the interface a signature backend exposes to the adapter.
*/

use crate::core::error::PrimitiveError;

/// A live signature instance bound to one resolved identifier
pub trait SignatureInstance: Send {
    /// Name the library reports for this algorithm
    fn method_name(&self) -> &str;

    /// Public key size for this algorithm
    fn length_public_key(&self) -> usize;

    /// Secret key size for this algorithm
    fn length_secret_key(&self) -> usize;

    /// Upper bound on the signature size for this algorithm
    fn length_signature(&self) -> usize;

    /// Generate a key pair
    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<(), PrimitiveError>;

    /// Sign `message` into `signature` and return the number of bytes written.
    /// `signature` is exactly `length_signature()` bytes.
    fn sign(
        &self,
        signature: &mut [u8],
        message: &[u8],
        secret_key: &[u8],
    ) -> Result<usize, PrimitiveError>;

    /// Check `signature` over `message` under `public_key`
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> bool;
}
