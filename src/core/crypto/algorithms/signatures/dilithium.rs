/*!
CRYSTALS-Dilithium2 signatures.

Wraps `pqcrypto_dilithium::dilithium2` behind the [`SignatureInstance`]
interface.
*/

use pqcrypto_dilithium::dilithium2;
use pqcrypto_dilithium::dilithium2::{
    DetachedSignature as Dilithium2DetachedSignature,
    PublicKey as Dilithium2PublicKey,
    SecretKey as Dilithium2SecretKey,
};
use pqcrypto_traits::sign::{DetachedSignature, PublicKey, SecretKey};

use super::super::copy_exact;
use crate::core::crypto::traits::SignatureInstance;
use crate::core::error::PrimitiveError;

/// Dilithium2 instance
#[derive(Debug, Default, Clone, Copy)]
pub struct Dilithium2Signature;

impl Dilithium2Signature {
    /// Name the library reports for this instance, whichever alias created it
    pub const METHOD_NAME: &'static str = "Dilithium2";

    pub fn new() -> Self {
        Self
    }
}

impl SignatureInstance for Dilithium2Signature {
    fn method_name(&self) -> &str {
        Self::METHOD_NAME
    }

    fn length_public_key(&self) -> usize {
        dilithium2::public_key_bytes()
    }

    fn length_secret_key(&self) -> usize {
        dilithium2::secret_key_bytes()
    }

    fn length_signature(&self) -> usize {
        dilithium2::signature_bytes()
    }

    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<(), PrimitiveError> {
        let (pk, sk) = dilithium2::keypair();
        copy_exact(public_key, pk.as_bytes(), PrimitiveError::KeyGeneration)?;
        copy_exact(secret_key, sk.as_bytes(), PrimitiveError::KeyGeneration)
    }

    fn sign(
        &self,
        signature: &mut [u8],
        message: &[u8],
        secret_key: &[u8],
    ) -> Result<usize, PrimitiveError> {
        let sk = Dilithium2SecretKey::from_bytes(secret_key)
            .map_err(|_| PrimitiveError::MalformedInput)?;
        let detached = dilithium2::detached_sign(message, &sk);
        let bytes = detached.as_bytes();
        if bytes.len() > signature.len() {
            return Err(PrimitiveError::Signing);
        }
        signature[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
        let Ok(pk) = Dilithium2PublicKey::from_bytes(public_key) else {
            return false;
        };
        let Ok(sig) = Dilithium2DetachedSignature::from_bytes(signature) else {
            return false;
        };
        dilithium2::verify_detached_signature(&sig, message, &pk).is_ok()
    }
}
