/*!
Registry of installed algorithm implementations.

[`PqcryptoProvider`] maps identifiers to constructors for the pqcrypto-backed
instances. It plays the part of the installed library: the resolver asks it
for each candidate name in turn.
*/

use std::collections::HashMap;
use std::fmt;

use crate::core::crypto::algorithms::{Dilithium2Signature, Kyber512Kem};
use crate::core::crypto::traits::{KemInstance, Provider, SignatureInstance};

/// Constructor for a KEM instance
pub type KemConstructor = fn() -> Box<dyn KemInstance>;

/// Constructor for a signature instance
pub type SignatureConstructor = fn() -> Box<dyn SignatureInstance>;

fn kyber512() -> Box<dyn KemInstance> {
    Box::new(Kyber512Kem::new())
}

fn dilithium2() -> Box<dyn SignatureInstance> {
    Box::new(Dilithium2Signature::new())
}

/// Name-indexed table of supported algorithms
#[derive(Clone)]
pub struct PqcryptoProvider {
    /// Available KEM algorithms
    kem_algorithms: HashMap<String, KemConstructor>,

    /// Available signature algorithms
    signature_algorithms: HashMap<String, SignatureConstructor>,
}

impl PqcryptoProvider {
    /// A provider with nothing registered
    pub fn empty() -> Self {
        Self {
            kem_algorithms: HashMap::new(),
            signature_algorithms: HashMap::new(),
        }
    }

    /// Register a KEM constructor under `name`
    pub fn register_kem(&mut self, name: &str, constructor: KemConstructor) -> &mut Self {
        self.kem_algorithms.insert(name.to_string(), constructor);
        self
    }

    /// Register a signature constructor under `name`
    pub fn register_signature(&mut self, name: &str, constructor: SignatureConstructor) -> &mut Self {
        self.signature_algorithms.insert(name.to_string(), constructor);
        self
    }

    /// Remove a KEM identifier
    pub fn unregister_kem(&mut self, name: &str) -> &mut Self {
        self.kem_algorithms.remove(name);
        self
    }

    /// Remove a signature identifier
    pub fn unregister_signature(&mut self, name: &str) -> &mut Self {
        self.signature_algorithms.remove(name);
        self
    }

    /// List registered KEM identifiers, sorted
    pub fn list_kem_algorithms(&self) -> Vec<String> {
        let mut names: Vec<String> = self.kem_algorithms.keys().cloned().collect();
        names.sort();
        names
    }

    /// List registered signature identifiers, sorted
    pub fn list_signature_algorithms(&self) -> Vec<String> {
        let mut names: Vec<String> = self.signature_algorithms.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for PqcryptoProvider {
    /// The pqcrypto crates implement the round-3 submissions, so only the
    /// legacy identifiers are registered. The FIPS names fall through.
    fn default() -> Self {
        let mut provider = Self::empty();
        provider
            .register_kem("Kyber512", kyber512)
            .register_kem("Kyber-512", kyber512)
            .register_signature("Dilithium2", dilithium2)
            .register_signature("Dilithium-2", dilithium2);
        provider
    }
}

impl Provider for PqcryptoProvider {
    fn new_kem(&self, name: &str) -> Option<Box<dyn KemInstance>> {
        self.kem_algorithms.get(name).map(|constructor| constructor())
    }

    fn new_signature(&self, name: &str) -> Option<Box<dyn SignatureInstance>> {
        self.signature_algorithms.get(name).map(|constructor| constructor())
    }
}

impl fmt::Debug for PqcryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PqcryptoProvider")
            .field("kem_algorithms", &self.list_kem_algorithms())
            .field("signature_algorithms", &self.list_signature_algorithms())
            .finish()
    }
}
