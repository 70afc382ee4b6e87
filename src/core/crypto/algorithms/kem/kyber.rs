/*!
CRYSTALS-Kyber-512 key encapsulation.

Wraps `pqcrypto_kyber::kyber512` behind the [`KemInstance`] interface.

The library's `SharedSecret` is not zeroized when it drops. Each operation
copies it into the caller's buffer and drops it straight away, so the
unwiped copy never outlives the call that produced it.
*/

use pqcrypto_kyber::kyber512;
use pqcrypto_kyber::kyber512::{
    Ciphertext as Kyber512Ciphertext,
    PublicKey as Kyber512PublicKey,
    SecretKey as Kyber512SecretKey,
};
use pqcrypto_traits::kem::{Ciphertext, PublicKey, SecretKey, SharedSecret};

use super::super::copy_exact;
use crate::core::crypto::traits::KemInstance;
use crate::core::error::PrimitiveError;

/// Kyber512 instance
#[derive(Debug, Default, Clone, Copy)]
pub struct Kyber512Kem;

impl Kyber512Kem {
    /// Name the library reports for this instance, whichever alias created it
    pub const METHOD_NAME: &'static str = "Kyber512";

    pub fn new() -> Self {
        Self
    }
}

impl KemInstance for Kyber512Kem {
    fn method_name(&self) -> &str {
        Self::METHOD_NAME
    }

    fn length_public_key(&self) -> usize {
        kyber512::public_key_bytes()
    }

    fn length_secret_key(&self) -> usize {
        kyber512::secret_key_bytes()
    }

    fn length_ciphertext(&self) -> usize {
        kyber512::ciphertext_bytes()
    }

    fn length_shared_secret(&self) -> usize {
        kyber512::shared_secret_bytes()
    }

    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<(), PrimitiveError> {
        let (pk, sk) = kyber512::keypair();
        copy_exact(public_key, pk.as_bytes(), PrimitiveError::KeyGeneration)?;
        copy_exact(secret_key, sk.as_bytes(), PrimitiveError::KeyGeneration)
    }

    fn encapsulate(
        &self,
        ciphertext: &mut [u8],
        shared_secret: &mut [u8],
        public_key: &[u8],
    ) -> Result<(), PrimitiveError> {
        let pk = Kyber512PublicKey::from_bytes(public_key)
            .map_err(|_| PrimitiveError::MalformedInput)?;
        let (ss, ct) = kyber512::encapsulate(&pk);
        if ciphertext.len() != ct.as_bytes().len() {
            drop(ss);
            return Err(PrimitiveError::Encapsulation);
        }
        let copied = copy_exact(shared_secret, ss.as_bytes(), PrimitiveError::Encapsulation);
        drop(ss);
        copied?;
        copy_exact(ciphertext, ct.as_bytes(), PrimitiveError::Encapsulation)
    }

    fn decapsulate(
        &self,
        shared_secret: &mut [u8],
        ciphertext: &[u8],
        secret_key: &[u8],
    ) -> Result<(), PrimitiveError> {
        let ct = Kyber512Ciphertext::from_bytes(ciphertext)
            .map_err(|_| PrimitiveError::MalformedInput)?;
        let sk = Kyber512SecretKey::from_bytes(secret_key)
            .map_err(|_| PrimitiveError::MalformedInput)?;
        let ss = kyber512::decapsulate(&ct, &sk);
        let copied = copy_exact(shared_secret, ss.as_bytes(), PrimitiveError::Decapsulation);
        drop(ss);
        copied
    }
}
