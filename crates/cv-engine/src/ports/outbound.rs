//! # Outbound Ports
//!
//! Traits for the wallet/identity provider and the injectable delay policy.

use async_trait::async_trait;
use shared_types::Identity;
use thiserror::Error;

/// Error from a signature request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignError {
    /// The user declined to sign.
    #[error("signature request declined")]
    Declined,

    /// The signer failed for another reason.
    #[error("signer failure: {0}")]
    Failed(String),
}

/// Wallet/identity provider - outbound port.
///
/// Supplies the session's current identity and an asymmetric-signature
/// capability. Signing is cancellable by the user; cancellation surfaces as
/// [`SignError::Declined`], never as a fault.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The active identity, if a wallet session exists.
    fn current_identity(&self) -> Option<Identity>;

    /// Request a signature over `message` from the active identity.
    async fn sign_message(&self, message: &str) -> Result<Vec<u8>, SignError>;
}

/// Where the engine may insert an artificial pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PausePhase {
    /// After a successful reveal signature, before handing back plaintext.
    AfterSignature,
    /// Before processing a review transition.
    BeforeReview,
}

/// Injectable pacing policy - outbound port.
///
/// The engine never hardcodes sleeps; pacing is a policy so tests run
/// synchronously with `NoDelay`.
#[async_trait]
pub trait DelayPolicy: Send + Sync {
    /// Pause for the given phase.
    async fn pause(&self, phase: PausePhase);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Scripted identity provider for tests.
#[derive(Debug, Default)]
pub struct ScriptedIdentity {
    identity: Option<Identity>,
    decline: std::sync::atomic::AtomicBool,
    sign_calls: std::sync::atomic::AtomicUsize,
}

impl ScriptedIdentity {
    /// A provider with an active identity that signs everything.
    pub fn with_identity(address: &str) -> Self {
        Self {
            identity: Some(Identity::new(address)),
            ..Self::default()
        }
    }

    /// A provider with no active identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Script whether subsequent signature requests are declined.
    pub fn set_decline(&self, decline: bool) {
        self.decline
            .store(decline, std::sync::atomic::Ordering::SeqCst);
    }

    /// How many signature requests have been made.
    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }

    async fn sign_message(&self, message: &str) -> Result<Vec<u8>, SignError> {
        self.sign_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.identity.is_none() {
            return Err(SignError::Failed("no active identity".to_string()));
        }
        if self.decline.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SignError::Declined);
        }
        // A stand-in signature: stable per message, obviously not cryptographic.
        Ok(message.as_bytes().iter().rev().copied().collect())
    }
}
