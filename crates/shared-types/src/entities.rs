//! # Core Domain Entities
//!
//! The corpus record, its review status, and the submission draft.
//!
//! ## Clusters
//!
//! - **Registry**: [`CorpusRecord`], [`RecordDraft`]
//! - **Workflow**: [`RecordStatus`] and its transition rules

use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a corpus record.
///
/// The state machine is `pending --verify--> verified` and
/// `pending --reject--> rejected`; both outcomes are terminal. Legality is
/// encoded here, away from storage, so the invariant can be tested in
/// isolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Awaiting community review.
    #[default]
    Pending,
    /// Accepted by review (terminal).
    Verified,
    /// Declined by review (terminal).
    Rejected,
}

impl RecordStatus {
    /// Whether this status admits no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, RecordStatus::Verified | RecordStatus::Rejected)
    }

    /// Whether a transition from `self` to `target` is legal.
    ///
    /// Only `Pending -> Verified` and `Pending -> Rejected` are allowed;
    /// `Pending -> Pending` and anything out of a terminal state are not.
    pub fn can_transition_to(self, target: RecordStatus) -> bool {
        self == RecordStatus::Pending && target.is_terminal()
    }

    /// The lowercase wire form, also used for status filtering.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Verified => "verified",
            RecordStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contributed language-sample entry.
///
/// Every field except `status` is immutable after creation. The payload is
/// opaque to everything but the envelope codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Globally unique identifier, generated at creation.
    pub id: String,
    /// Envelope-encoded contributor content.
    pub encrypted_payload: String,
    /// Unix seconds, set once at creation.
    pub created_at: u64,
    /// The creator's wallet identity.
    pub owner: Identity,
    /// Free-text language name.
    pub language: String,
    /// Free-text geographical region.
    pub region: String,
    /// Current review status.
    pub status: RecordStatus,
}

impl CorpusRecord {
    /// Whether `identity` is this record's owner (case-insensitive by
    /// construction of [`Identity`]).
    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        &self.owner == identity
    }
}

/// Contributor input for a new submission, before encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Language name (required).
    pub language: String,
    /// Geographical region.
    pub region: String,
    /// The corpus sample itself (text, phrases, ...).
    pub content: String,
}
