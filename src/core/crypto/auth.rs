/*!
Signing and verification through a resolved signature scheme.

Messages and keys pass through unchanged; the adapter checks buffer sizes,
resolves an instance per call and reports the actual signature length. A
signature that does not verify is an ordinary [`Verdict::Reject`], kept apart
from errors such as an unavailable algorithm.
*/

use log::trace;

use crate::core::crypto::registry::PqcryptoProvider;
use crate::core::crypto::resolver::Resolver;
use crate::core::crypto::traits::{Provider, SignatureInstance};
use crate::core::crypto::types::sizes::SignatureSizes;
use crate::core::error::{ensure_capacity, ensure_length, BufferKind, Result};

/// Outcome of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Verdict::Accept } else { Verdict::Reject }
    }
}

/// Signature adapter over a resolved algorithm
#[derive(Debug, Clone)]
pub struct SignatureAdapter<P = PqcryptoProvider> {
    resolver: Resolver<P>,
}

impl SignatureAdapter<PqcryptoProvider> {
    /// Adapter over the pqcrypto backends with the default candidates
    pub fn new() -> Self {
        Self::with_resolver(Resolver::new())
    }
}

impl Default for SignatureAdapter<PqcryptoProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> SignatureAdapter<P> {
    pub fn with_resolver(resolver: Resolver<P>) -> Self {
        Self { resolver }
    }

    pub fn with_provider(provider: P) -> Self {
        Self::with_resolver(Resolver::with_provider(provider))
    }

    pub fn resolver(&self) -> &Resolver<P> {
        &self.resolver
    }

    /// Name the library reports for the resolved scheme
    pub fn name(&self) -> Result<String> {
        Ok(self.resolver.resolve_signature()?.method_name().to_string())
    }

    pub fn public_key_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_signature()?.length_public_key())
    }

    pub fn secret_key_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_signature()?.length_secret_key())
    }

    pub fn max_signature_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_signature()?.length_signature())
    }

    /// All lengths from a single resolution
    pub fn sizes(&self) -> Result<SignatureSizes> {
        let sig = self.resolver.resolve_signature()?;
        Ok(SignatureSizes {
            public_key: sig.length_public_key(),
            secret_key: sig.length_secret_key(),
            max_signature: sig.length_signature(),
        })
    }

    /// Sign `message` into `signature` and return the number of bytes written.
    ///
    /// `signature` must hold at least [`max_signature_len`](Self::max_signature_len)
    /// bytes; the returned length never exceeds it.
    pub fn sign(&self, message: &[u8], secret_key: &[u8], signature: &mut [u8]) -> Result<usize> {
        let sig = self.resolver.resolve_signature()?;
        sign_with(sig.as_ref(), message, secret_key, signature)
    }

    /// Owned variant of [`sign`](Self::sign), trimmed to the actual length
    pub fn sign_to_vec(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        let sig = self.resolver.resolve_signature()?;
        let mut signature = vec![0u8; sig.length_signature()];
        let len = sign_with(sig.as_ref(), message, secret_key, &mut signature)?;
        signature.truncate(len);
        Ok(signature)
    }

    /// Check `signature` over `message` under `public_key`.
    ///
    /// A signature longer than the scheme's maximum cannot be valid and is
    /// rejected without calling into the library.
    pub fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<Verdict> {
        let sig = self.resolver.resolve_signature()?;
        verify_with(sig.as_ref(), public_key, message, signature)
    }

    /// Generate a key pair into caller buffers. Test fixture support only;
    /// the randomness is the library's.
    #[cfg(feature = "keygen")]
    pub fn generate_keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()> {
        let sig = self.resolver.resolve_signature()?;
        generate_keypair_with(sig.as_ref(), public_key, secret_key)
    }

    /// Owned variant of [`generate_keypair`](Self::generate_keypair)
    #[cfg(feature = "keygen")]
    pub fn generate_keypair_to_vec(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let sig = self.resolver.resolve_signature()?;
        let mut public_key = vec![0u8; sig.length_public_key()];
        let mut secret_key = vec![0u8; sig.length_secret_key()];
        generate_keypair_with(sig.as_ref(), &mut public_key, &mut secret_key)?;
        Ok((public_key, secret_key))
    }
}

pub(crate) fn sign_with(
    sig: &dyn SignatureInstance,
    message: &[u8],
    secret_key: &[u8],
    signature: &mut [u8],
) -> Result<usize> {
    ensure_length(BufferKind::SecretKey, sig.length_secret_key(), secret_key.len())?;
    let max_len = sig.length_signature();
    ensure_capacity(BufferKind::Signature, max_len, signature.len())?;

    trace!("Signing {} bytes with {}", message.len(), sig.method_name());
    let written = sig.sign(&mut signature[..max_len], message, secret_key)?;
    debug_assert!(written <= max_len);
    Ok(written)
}

pub(crate) fn verify_with(
    sig: &dyn SignatureInstance,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<Verdict> {
    ensure_length(BufferKind::PublicKey, sig.length_public_key(), public_key.len())?;
    if signature.len() > sig.length_signature() {
        trace!("Rejecting oversized signature ({} bytes)", signature.len());
        return Ok(Verdict::Reject);
    }

    trace!("Verifying {} bytes with {}", message.len(), sig.method_name());
    Ok(Verdict::from(sig.verify(message, signature, public_key)))
}

/// A failed call leaves the secret key buffer zeroed
#[cfg(feature = "keygen")]
pub(crate) fn generate_keypair_with(
    sig: &dyn SignatureInstance,
    public_key: &mut [u8],
    secret_key: &mut [u8],
) -> Result<()> {
    let pk_len = sig.length_public_key();
    let sk_len = sig.length_secret_key();
    ensure_capacity(BufferKind::PublicKey, pk_len, public_key.len())?;
    ensure_capacity(BufferKind::SecretKey, sk_len, secret_key.len())?;

    let sk = &mut secret_key[..sk_len];
    if let Err(err) = sig.keypair(&mut public_key[..pk_len], sk) {
        crate::core::memory::wipe(sk);
        return Err(err.into());
    }
    Ok(())
}
