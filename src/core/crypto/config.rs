/*!
Algorithm configuration for the PQC adapter.

Selects the candidate identifiers tried for each role. The defaults prefer the
standardized names and fall back to the legacy aliases.
*/

use crate::core::constants::candidates;
use crate::core::crypto::types::algorithms::{CandidateList, Role};
use crate::core::error::Result;

/// Candidate identifiers per role
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct AdapterConfig {
    /// Identifiers tried for the KEM
    pub kem: CandidateList,
    /// Identifiers tried for the signature scheme
    pub signature: CandidateList,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            kem: Role::Kem.default_candidates(),
            signature: Role::Signature.default_candidates(),
        }
    }
}

impl AdapterConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the pre-standard identifiers, for installations that ship
    /// the round-3 names
    pub fn legacy_only() -> Self {
        Self {
            kem: CandidateList::from_static(candidates::LEGACY_KEM),
            signature: CandidateList::from_static(candidates::LEGACY_SIGNATURE),
        }
    }

    /// Replace the KEM candidates
    pub fn with_kem_candidates<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kem = CandidateList::new(names)?;
        Ok(self)
    }

    /// Replace the signature candidates
    pub fn with_signature_candidates<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signature = CandidateList::new(names)?;
        Ok(self)
    }

    /// Candidates configured for `role`
    pub fn candidates(&self, role: Role) -> &CandidateList {
        match role {
            Role::Kem => &self.kem,
            Role::Signature => &self.signature,
        }
    }
}
