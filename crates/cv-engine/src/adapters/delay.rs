//! # Delay Policies
//!
//! The vault and review flows historically paced themselves with artificial
//! waits; here pacing is an explicit policy so tests run synchronously.

use crate::ports::{DelayPolicy, PausePhase};
use async_trait::async_trait;
use std::time::Duration;

/// No pauses at all. The default for tests and batch tooling.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl DelayPolicy for NoDelay {
    async fn pause(&self, _phase: PausePhase) {}
}

/// Fixed pauses per phase, for interactive frontends that want the
/// historical pacing.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    /// Pause after a successful reveal signature.
    pub after_signature: Duration,
    /// Pause before processing a review transition.
    pub before_review: Duration,
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self {
            after_signature: Duration::from_millis(1_500),
            before_review: Duration::from_millis(3_000),
        }
    }
}

#[async_trait]
impl DelayPolicy for FixedDelay {
    async fn pause(&self, phase: PausePhase) {
        let duration = match phase {
            PausePhase::AfterSignature => self.after_signature,
            PausePhase::BeforeReview => self.before_review,
        };
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
