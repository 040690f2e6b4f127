//! # Domain Layer
//!
//! Pure logic with no vault access: the envelope codec, record id
//! generation, and the wire formats stored under vault keys.

pub mod envelope;
pub mod id;
pub mod wire;

pub use id::generate_record_id;
pub use wire::{ClearPayload, StoredIndex, StoredRecord};
