//! # Corpus Engine (cv-engine)
//!
//! The client-side orchestration layer of Corpus-Vault: full-pass
//! synchronization of the in-memory snapshot, submission and review
//! operations with identity checks, the signature-gated reveal protocol, and
//! pure read-side projections.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Single Writer | Only the synchronization routine mutates the snapshot |
//! | 2 | Later Pass Wins | A superseded sync pass never installs its result |
//! | 3 | Identity Before I/O | `Unauthorized` surfaces before any vault call |
//! | 4 | Owner-Only Review | Transitions require caller identity == record owner |
//! | 5 | Gated Reveal | Plaintext is produced only after a successful signature in the same call |
//! | 6 | No Plaintext Cache | Every hide/show cycle re-runs the signature step |
//! | 7 | Pure Projections | Views are O(n), I/O-free, and never mutate the snapshot |
//!
//! The signature in the reveal protocol is neither persisted nor checked by a
//! verifier; it is a local consent/proof-of-control gate (trust-on-first-use),
//! not a cryptographic access-control guarantee.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `session.rs` - Explicit per-session context and the challenge builder
//! - `ports/` - `IdentityProvider` and `DelayPolicy` traits (outbound SPI)
//! - `adapters/` - ed25519 wallet, delay policies
//! - `reveal.rs` - The challenge/signature/decode gate
//! - `service.rs` - `RegistryEngine` orchestrating store, identity, snapshot
//! - `views.rs` - Filtering, pagination, aggregation

pub mod adapters;
pub mod config;
pub mod ports;
pub mod reveal;
pub mod service;
pub mod session;
pub mod views;

// Re-export key types for convenience
pub use adapters::{FixedDelay, LocalWallet, NoDelay};
pub use config::EngineConfig;
pub use ports::{DelayPolicy, IdentityProvider, PausePhase, ScriptedIdentity, SignError};
pub use service::{RegistryEngine, SyncReport};
pub use session::SessionContext;
pub use views::{filter, language_counts, page_count, paginate, status_counts, StatusCounts};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
