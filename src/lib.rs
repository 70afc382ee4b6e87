/*!
# PQC Adapter

A fixed-size-buffer adapter over post-quantum primitives: a KEM at the 512
security tier and a signature scheme at the matching tier.

## Overview

- Algorithms are resolved at call time from an ordered list of identifiers
  (standardized name first, then legacy aliases), so callers do not depend on
  which name the installed library uses.
- Encapsulation and decapsulation return a 16-byte session key,
  `SHA-256(shared_secret)[..16]`. The raw shared secret never leaves the
  adapter and is wiped on every path.
- Sign and verify pass messages and keys through unchanged. A failed
  verification is a [`Verdict::Reject`], distinct from an unavailable
  algorithm.
- Length queries let callers size buffers before calling in.
- With the `ffi` feature, the same operations are exported with a C ABI.

```no_run
use pqc_adapter::{KemAdapter, SignatureAdapter, Verdict};

# fn main() -> pqc_adapter::Result<()> {
let kem = KemAdapter::new();
let (pk, sk) = kem.generate_keypair_to_vec()?;
let (ciphertext, k1) = kem.encapsulate_to_vec(&pk)?;
let k2 = kem.decapsulate_to_key(&sk, &ciphertext)?;
assert_eq!(k1, k2);

let sig = SignatureAdapter::new();
let (pk, sk) = sig.generate_keypair_to_vec()?;
let signature = sig.sign_to_vec(b"test", &sk)?;
assert_eq!(sig.verify(&pk, b"test", &signature)?, Verdict::Accept);
# Ok(())
# }
```
*/

// Core adapter components
pub mod core;

// C ABI
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types for convenience
pub use crate::core::constants::{LENGTH_SENTINEL, SESSION_KEY_LEN};
pub use crate::core::error::{BufferKind, Error, PrimitiveError, Result, ResultCode};
pub use crate::core::crypto::{
    length_or_sentinel, AdapterConfig, CandidateList, KemAdapter, KemInstance, KemSizes,
    PqcryptoProvider, Provider, Resolver, Role, SessionKey, SignatureAdapter, SignatureInstance,
    SignatureSizes, Verdict,
};
pub use crate::core::memory::{wipe, SecretBuffer, SecretScope};
