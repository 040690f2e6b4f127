//! # Shared Types Crate
//!
//! Core entities, the identity type, and the workspace-wide error taxonomy.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate boundary is
//!   defined here.
//! - **Wire-compatible serialization**: serde attributes on these types define
//!   the JSON forms stored in the vault; changing them is a format change.
//! - **Storage-free rules**: status-transition legality lives on
//!   [`RecordStatus`] itself so it can be enforced and tested without a store.

pub mod entities;
pub mod errors;
pub mod identity;

pub use entities::{CorpusRecord, RecordDraft, RecordStatus};
pub use errors::RegistryError;
pub use identity::Identity;
