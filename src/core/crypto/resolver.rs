/*!
Algorithm resolution.

The resolver walks a role's candidate identifiers in preference order and
returns the first instance the provider can create. It keeps no state between
calls: every operation resolves a fresh instance and drops it when done.
*/

use log::{debug, warn};

use crate::core::crypto::config::AdapterConfig;
use crate::core::crypto::registry::PqcryptoProvider;
use crate::core::crypto::traits::{KemInstance, Provider, SignatureInstance};
use crate::core::crypto::types::algorithms::Role;
use crate::core::error::{Error, Result};

/// Resolves roles to live algorithm instances
#[derive(Debug, Clone)]
pub struct Resolver<P = PqcryptoProvider> {
    provider: P,
    config: AdapterConfig,
}

impl Resolver<PqcryptoProvider> {
    /// Resolver over the pqcrypto backends with the default candidates
    pub fn new() -> Self {
        Self::with_provider(PqcryptoProvider::default())
    }
}

impl Default for Resolver<PqcryptoProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Resolver<P> {
    /// Resolver over `provider` with the default candidates
    pub fn with_provider(provider: P) -> Self {
        Self::with_config(provider, AdapterConfig::default())
    }

    /// Resolver over `provider` with explicit candidates
    pub fn with_config(provider: P, config: AdapterConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// First KEM instance the provider can create
    pub fn resolve_kem(&self) -> Result<Box<dyn KemInstance>> {
        self.resolve_first(Role::Kem, |name| self.provider.new_kem(name))
    }

    /// First signature instance the provider can create
    pub fn resolve_signature(&self) -> Result<Box<dyn SignatureInstance>> {
        self.resolve_first(Role::Signature, |name| self.provider.new_signature(name))
    }

    /// Name the library reports for the instance `role` resolves to
    pub fn name(&self, role: Role) -> Result<String> {
        match role {
            Role::Kem => self.resolve_kem().map(|kem| kem.method_name().to_string()),
            Role::Signature => self.resolve_signature().map(|sig| sig.method_name().to_string()),
        }
    }

    fn resolve_first<T>(&self, role: Role, create: impl Fn(&str) -> Option<T>) -> Result<T> {
        let candidates = self.config.candidates(role);
        for name in candidates.iter() {
            match create(name) {
                Some(instance) => {
                    debug!("Resolved {} algorithm as {}", role, name);
                    return Ok(instance);
                }
                None => debug!("{} algorithm {} not available", role, name),
            }
        }

        warn!("No supported {} algorithm available", role);
        Err(Error::Unavailable {
            role,
            tried: candidates.to_vec(),
        })
    }
}
