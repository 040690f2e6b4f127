//! # Error Types
//!
//! The workspace-wide error taxonomy.
//!
//! Propagation policy: per-item faults during a bulk synchronization pass are
//! isolated and logged by the caller, never escalated to fail the whole pass;
//! single-item operations (create, transition, reveal) propagate their
//! specific kind for user-visible messaging. The core retries nothing on its
//! own apart from the bounded index-append loop.

use crate::entities::RecordStatus;
use thiserror::Error;

/// Errors surfaced by the registry and synchronization engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Backing store unreachable or disabled. A synchronization pass aborts
    /// early and the prior snapshot is retained.
    #[error("Vault not available: {0}")]
    NotAvailable(String),

    /// Index or record payload unparsable. Skipped and logged at per-item
    /// granularity during bulk loads.
    #[error("Malformed data: {context}")]
    MalformedData {
        /// What was being decoded when parsing failed.
        context: String,
    },

    /// No active identity for a write or reveal. Surfaced before any store
    /// call is attempted.
    #[error("No active identity")]
    Unauthorized,

    /// The signature step was declined or failed. Distinct from
    /// `Unauthorized`: an identity was present but did not consent.
    #[error("Signature request denied")]
    Denied,

    /// Record id absent. Surfaced on direct lookup, silently skipped on bulk
    /// load.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Index append failed after the record write succeeded. The record
    /// exists but is undiscoverable via enumeration; reported, never masked.
    #[error("Record {id} stored but not indexed")]
    Inconsistent {
        /// Id of the stored-but-unindexed record.
        id: String,
    },

    /// Illegal status-machine transition.
    #[error("Illegal transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the record currently holds.
        from: RecordStatus,
        /// Requested target status.
        to: RecordStatus,
    },
}
