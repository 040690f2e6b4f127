//! # Identity
//!
//! The cryptographic actor attributable to a record's owner and to reviewers.
//!
//! An [`Identity`] is a `0x`-prefixed hex address string. Addresses arrive
//! from wallets in mixed case, so the constructor normalizes to lowercase and
//! equality is effectively case-insensitive. Derivation from key material is
//! an adapter concern (see `cv-engine`); this type only carries the address.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wallet-style address identifying one actor.
///
/// Normalized to lowercase at construction; two identities differing only in
/// hex case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Create an identity from an address string, normalizing case.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into().to_lowercase())
    }

    /// The normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identity {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl From<&str> for Identity {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
