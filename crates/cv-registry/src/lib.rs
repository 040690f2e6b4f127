//! # Corpus Registry (cv-registry)
//!
//! The persistence core of Corpus-Vault: record CRUD, the key index, and the
//! review-status workflow, built over an opaque, latency-heavy, eventually
//! consistent key-addressed vault.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Index Authority | The index is the only enumeration of record ids |
//! | 2 | Index Resolution | Every indexed id resolves to exactly one record |
//! | 3 | No Duplicate Ids | An id is appended to the index at most once |
//! | 4 | Append-Only Index | Ids are never removed; rejection is a status change |
//! | 5 | Status Monotonicity | `verified` and `rejected` are terminal |
//! | 6 | Immutable Creation | id, payload, owner, metadata never change after create |
//! | 7 | Fail-Soft Bulk Loads | A malformed item is skipped, never aborts the pass |
//!
//! ## Known Races (documented, not prevented)
//!
//! The vault contract offers no compare-and-swap and no multi-key atomicity.
//! Two sessions appending to the index concurrently can each base their write
//! on the same snapshot and silently drop the other's id; the bounded
//! read-back retry in the index manager narrows this window but cannot close
//! it. Concurrent status transitions on one record are last-write-wins.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Envelope codec, id generation, wire formats
//! - `ports/` - `DataVault` and `Clock` traits (outbound SPI)
//! - `adapters/` - In-memory vault with failure injection
//! - `service.rs` - `RecordStore` implementing the registry operations
//!
//! ## Usage
//!
//! ```ignore
//! use cv_registry::{MemoryVault, RecordStore, RegistryConfig, SystemClock};
//! use shared_types::{Identity, RecordDraft};
//! use std::sync::Arc;
//!
//! let vault = Arc::new(MemoryVault::new());
//! let store = RecordStore::new(vault, SystemClock, RegistryConfig::default());
//!
//! let record = store.create_record(&draft, &owner).await?;
//! let all = store.load_all().await?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::MemoryVault;
pub use config::RegistryConfig;
pub use domain::envelope;
pub use domain::wire::{ClearPayload, StoredIndex, StoredRecord};
pub use ports::{Clock, DataVault, FixedClock, SystemClock};
pub use service::{RecordBatch, RecordStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
