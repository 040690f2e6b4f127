//! # Local Wallet
//!
//! An `IdentityProvider` backed by an in-process ed25519 keypair. The
//! identity address is derived wallet-style: Keccak-256 over the verifying
//! key, last 20 bytes, hex with `0x` prefix.
//!
//! Production deployments talk to an external wallet instead; this adapter
//! exists for nodes holding their own keys and for integration tests that
//! need real signatures.

use crate::ports::{IdentityProvider, SignError};
use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::Identity;

/// Identity provider holding its own ed25519 signing key.
pub struct LocalWallet {
    signing_key: SigningKey,
    identity: Identity,
}

impl LocalWallet {
    /// Create a wallet from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let identity = derive_address(&signing_key.verifying_key());
        Self {
            signing_key,
            identity,
        }
    }

    /// Create a wallet with a random seed.
    pub fn generate() -> Self {
        Self::from_seed(rand::random())
    }

    /// The wallet's address.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The wallet's verifying key, for callers that want to check
    /// signatures out of band.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

/// Keccak-256 over the verifying key bytes; the last 20 digest bytes are the
/// address.
fn derive_address(key: &VerifyingKey) -> Identity {
    let digest = Keccak256::digest(key.as_bytes());
    Identity::new(format!("0x{}", hex::encode(&digest[12..])))
}

#[async_trait]
impl IdentityProvider for LocalWallet {
    fn current_identity(&self) -> Option<Identity> {
        Some(self.identity.clone())
    }

    async fn sign_message(&self, message: &str) -> Result<Vec<u8>, SignError> {
        Ok(self.signing_key.sign(message.as_bytes()).to_bytes().to_vec())
    }
}
