//! # Ports
//!
//! Traits for external collaborators of the engine.

pub mod outbound;

pub use outbound::{DelayPolicy, IdentityProvider, PausePhase, ScriptedIdentity, SignError};
