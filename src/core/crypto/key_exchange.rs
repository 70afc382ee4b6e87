/*!
Key encapsulation with session-key derivation.

The adapter never hands out the raw shared secret. Each operation resolves a
KEM instance, lets it fill a wiped-on-drop shared-secret buffer, hashes the
whole secret with SHA-256 and copies the first 16 digest bytes to the caller.
The digest and the shared secret are wiped before the operation returns,
whether it succeeded or not.
*/

use std::fmt;

use log::trace;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{DIGEST_LEN, SESSION_KEY_LEN};
use crate::core::crypto::registry::PqcryptoProvider;
use crate::core::crypto::resolver::Resolver;
use crate::core::crypto::traits::{KemInstance, Provider};
use crate::core::crypto::types::sizes::KemSizes;
use crate::core::error::{ensure_capacity, ensure_length, BufferKind, PrimitiveError, Result};
use crate::core::memory::{SecretBuffer, SecretScope};

/// 16-byte key derived from a shared secret, wiped on drop
#[derive(Clone, PartialEq, Eq, Default, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey([u8; SESSION_KEY_LEN]);

impl SessionKey {
    pub fn as_bytes(&self) -> &[u8; SESSION_KEY_LEN] {
        &self.0
    }

    pub fn len(&self) -> usize {
        SESSION_KEY_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for SessionKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey([REDACTED])")
    }
}

/// KEM adapter over a resolved algorithm
#[derive(Debug, Clone)]
pub struct KemAdapter<P = PqcryptoProvider> {
    resolver: Resolver<P>,
}

impl KemAdapter<PqcryptoProvider> {
    /// Adapter over the pqcrypto backends with the default candidates
    pub fn new() -> Self {
        Self::with_resolver(Resolver::new())
    }
}

impl Default for KemAdapter<PqcryptoProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> KemAdapter<P> {
    pub fn with_resolver(resolver: Resolver<P>) -> Self {
        Self { resolver }
    }

    pub fn with_provider(provider: P) -> Self {
        Self::with_resolver(Resolver::with_provider(provider))
    }

    pub fn resolver(&self) -> &Resolver<P> {
        &self.resolver
    }

    /// Name the library reports for the resolved KEM
    pub fn name(&self) -> Result<String> {
        Ok(self.resolver.resolve_kem()?.method_name().to_string())
    }

    pub fn public_key_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_kem()?.length_public_key())
    }

    pub fn secret_key_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_kem()?.length_secret_key())
    }

    pub fn ciphertext_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_kem()?.length_ciphertext())
    }

    /// Length of the raw shared secret, which is never returned
    pub fn shared_secret_len(&self) -> Result<usize> {
        Ok(self.resolver.resolve_kem()?.length_shared_secret())
    }

    /// Always 16, whether or not an algorithm resolves
    pub fn session_key_len(&self) -> usize {
        SESSION_KEY_LEN
    }

    /// All caller-facing lengths from a single resolution
    pub fn sizes(&self) -> Result<KemSizes> {
        let kem = self.resolver.resolve_kem()?;
        Ok(KemSizes::new(
            kem.length_public_key(),
            kem.length_secret_key(),
            kem.length_ciphertext(),
        ))
    }

    /// Encapsulate to `public_key`, writing the ciphertext and the 16-byte
    /// session key.
    ///
    /// `session_key` must hold at least 16 bytes; this is checked before
    /// anything is resolved. Only the first 16 bytes are written, and only on
    /// success.
    pub fn encapsulate(
        &self,
        public_key: &[u8],
        ciphertext: &mut [u8],
        session_key: &mut [u8],
    ) -> Result<()> {
        ensure_capacity(BufferKind::SessionKey, SESSION_KEY_LEN, session_key.len())?;
        let kem = self.resolver.resolve_kem()?;
        encapsulate_with(kem.as_ref(), public_key, ciphertext, session_key)
    }

    /// Decapsulate `ciphertext` with `secret_key`, writing the 16-byte
    /// session key. Same buffer rules as [`encapsulate`](Self::encapsulate).
    pub fn decapsulate(
        &self,
        secret_key: &[u8],
        ciphertext: &[u8],
        session_key: &mut [u8],
    ) -> Result<()> {
        ensure_capacity(BufferKind::SessionKey, SESSION_KEY_LEN, session_key.len())?;
        let kem = self.resolver.resolve_kem()?;
        decapsulate_with(kem.as_ref(), secret_key, ciphertext, session_key)
    }

    /// Owned variant of [`encapsulate`](Self::encapsulate)
    pub fn encapsulate_to_vec(&self, public_key: &[u8]) -> Result<(Vec<u8>, SessionKey)> {
        let kem = self.resolver.resolve_kem()?;
        let mut ciphertext = vec![0u8; kem.length_ciphertext()];
        let mut key = SessionKey::default();
        encapsulate_with(kem.as_ref(), public_key, &mut ciphertext, &mut key.0)?;
        Ok((ciphertext, key))
    }

    /// Owned variant of [`decapsulate`](Self::decapsulate)
    pub fn decapsulate_to_key(&self, secret_key: &[u8], ciphertext: &[u8]) -> Result<SessionKey> {
        let kem = self.resolver.resolve_kem()?;
        let mut key = SessionKey::default();
        decapsulate_with(kem.as_ref(), secret_key, ciphertext, &mut key.0)?;
        Ok(key)
    }

    /// Generate a key pair into caller buffers. Test fixture support only;
    /// the randomness is the library's.
    #[cfg(feature = "keygen")]
    pub fn generate_keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()> {
        let kem = self.resolver.resolve_kem()?;
        generate_keypair_with(kem.as_ref(), public_key, secret_key)
    }

    /// Owned variant of [`generate_keypair`](Self::generate_keypair)
    #[cfg(feature = "keygen")]
    pub fn generate_keypair_to_vec(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let kem = self.resolver.resolve_kem()?;
        let mut public_key = vec![0u8; kem.length_public_key()];
        let mut secret_key = vec![0u8; kem.length_secret_key()];
        generate_keypair_with(kem.as_ref(), &mut public_key, &mut secret_key)?;
        Ok((public_key, secret_key))
    }
}

/// Key generation against an already resolved instance. A failed call leaves
/// the secret key buffer zeroed.
#[cfg(feature = "keygen")]
pub(crate) fn generate_keypair_with(
    kem: &dyn KemInstance,
    public_key: &mut [u8],
    secret_key: &mut [u8],
) -> Result<()> {
    let pk_len = kem.length_public_key();
    let sk_len = kem.length_secret_key();
    ensure_capacity(BufferKind::PublicKey, pk_len, public_key.len())?;
    ensure_capacity(BufferKind::SecretKey, sk_len, secret_key.len())?;

    let sk = &mut secret_key[..sk_len];
    if let Err(err) = kem.keypair(&mut public_key[..pk_len], sk) {
        crate::core::memory::wipe(sk);
        return Err(err.into());
    }
    Ok(())
}

/// Encapsulation against an already resolved instance
pub(crate) fn encapsulate_with(
    kem: &dyn KemInstance,
    public_key: &[u8],
    ciphertext: &mut [u8],
    session_key: &mut [u8],
) -> Result<()> {
    ensure_capacity(BufferKind::SessionKey, SESSION_KEY_LEN, session_key.len())?;
    ensure_length(BufferKind::PublicKey, kem.length_public_key(), public_key.len())?;
    let ct_len = kem.length_ciphertext();
    ensure_capacity(BufferKind::Ciphertext, ct_len, ciphertext.len())?;

    trace!("Encapsulating with {}", kem.method_name());
    let ciphertext = &mut ciphertext[..ct_len];
    let mut shared_secret = SecretBuffer::zeroed(kem.length_shared_secret());
    derive_with_scratch(
        &mut shared_secret,
        |ss| kem.encapsulate(ciphertext, ss, public_key),
        session_key,
    )
}

/// Decapsulation against an already resolved instance
pub(crate) fn decapsulate_with(
    kem: &dyn KemInstance,
    secret_key: &[u8],
    ciphertext: &[u8],
    session_key: &mut [u8],
) -> Result<()> {
    ensure_capacity(BufferKind::SessionKey, SESSION_KEY_LEN, session_key.len())?;
    ensure_length(BufferKind::SecretKey, kem.length_secret_key(), secret_key.len())?;
    ensure_length(BufferKind::Ciphertext, kem.length_ciphertext(), ciphertext.len())?;

    trace!("Decapsulating with {}", kem.method_name());
    let mut shared_secret = SecretBuffer::zeroed(kem.length_shared_secret());
    derive_with_scratch(
        &mut shared_secret,
        |ss| kem.decapsulate(ss, ciphertext, secret_key),
        session_key,
    )
}

/// Let `fill` produce a shared secret in `scratch`, then derive the session
/// key from it. `scratch` is zero when this returns, on every path.
fn derive_with_scratch<F>(scratch: &mut [u8], fill: F, session_key: &mut [u8]) -> Result<()>
where
    F: FnOnce(&mut [u8]) -> std::result::Result<(), PrimitiveError>,
{
    let mut shared_secret = SecretScope::new(scratch);
    fill(&mut shared_secret[..])?;
    derive_session_key(&shared_secret, session_key);
    Ok(())
}

/// `session_key[..16] = SHA-256(shared_secret)[..16]`
fn derive_session_key(shared_secret: &[u8], session_key: &mut [u8]) {
    let mut digest_storage = [0u8; DIGEST_LEN];
    let mut digest = SecretScope::new(&mut digest_storage);

    let mut hasher = Sha256::new();
    hasher.update(shared_secret);
    hasher.finalize_into(GenericArray::from_mut_slice(&mut digest[..]));

    session_key[..SESSION_KEY_LEN].copy_from_slice(&digest[..SESSION_KEY_LEN]);
}
