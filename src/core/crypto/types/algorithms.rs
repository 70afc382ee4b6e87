/*!
Algorithm identity types.

A [`Role`] names a logical primitive; a [`CandidateList`] holds the
identifiers accepted for it, in preference order.
*/

use std::fmt;

use crate::core::constants::candidates;
use crate::core::error::{Error, Result};

/// Logical primitive a caller asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Key encapsulation mechanism
    Kem,
    /// Digital signature scheme
    Signature,
}

impl Role {
    /// Get the name of the role as a string
    pub fn name(&self) -> &'static str {
        match self {
            Role::Kem => "KEM",
            Role::Signature => "signature",
        }
    }

    /// Built-in candidate identifiers for this role
    pub fn default_candidates(&self) -> CandidateList {
        match self {
            Role::Kem => CandidateList::from_static(candidates::KEM),
            Role::Signature => CandidateList::from_static(candidates::SIGNATURE),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, non-empty list of identifiers for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize), serde(transparent))]
pub struct CandidateList {
    names: Vec<String>,
}

impl CandidateList {
    /// Build a list from identifiers in preference order
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::InvalidConfig("candidate list must not be empty".into()));
        }
        if names.iter().any(|name| name.is_empty()) {
            return Err(Error::InvalidConfig("candidate identifiers must not be empty".into()));
        }
        Ok(Self { names })
    }

    /// Build from one of the non-empty lists in [`candidates`]
    pub(crate) fn from_static(names: &'static [&'static str]) -> Self {
        debug_assert!(!names.is_empty());
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// The most preferred identifier
    pub fn preferred(&self) -> &str {
        &self.names[0]
    }

    /// Iterate identifiers in preference order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list holds no identifiers
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Copy of the identifiers, used in resolution errors
    pub(crate) fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }
}

#[cfg(feature = "serde-support")]
impl<'de> serde::Deserialize<'de> for CandidateList {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        CandidateList::new(names).map_err(serde::de::Error::custom)
    }
}
