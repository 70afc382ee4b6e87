/*!
Cryptographic components for the PQC adapter.

This module provides algorithm resolution, the KEM and signature adapters,
and the pqcrypto-backed implementations they resolve to.
*/

// Algorithm implementations
pub mod algorithms;

// Key encapsulation with session-key derivation
pub mod key_exchange;

// Signing and verification
pub mod auth;

// Config
pub mod config;

// Name table for installed algorithms
pub mod registry;

// Candidate resolution
pub mod resolver;

// Library boundary traits
pub mod traits;

// Shared types
pub mod types;

pub use auth::{SignatureAdapter, Verdict};
pub use config::AdapterConfig;
pub use key_exchange::{KemAdapter, SessionKey};
pub use registry::PqcryptoProvider;
pub use resolver::Resolver;
pub use traits::{KemInstance, Provider, SignatureInstance};
pub use types::{length_or_sentinel, CandidateList, KemSizes, Role, SignatureSizes};
