//! # Registry Configuration
//!
//! Key layout and retry bounds for the record store and index manager.

use serde::{Deserialize, Serialize};

/// Registry configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Well-known key holding the serialized index.
    pub index_key: String,

    /// Prefix for record keys; a record lives at `<prefix><id>`.
    pub record_key_prefix: String,

    /// Additional attempts for the index read-modify-write loop after the
    /// first write's read-back fails to show the appended id.
    pub index_retry_limit: usize,

    /// Length of the random base36 suffix in generated record ids.
    pub id_suffix_len: usize,

    /// Attempts to regenerate an id that already resolves to a record.
    pub id_collision_retries: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            index_key: "corpus_keys".to_string(),
            record_key_prefix: "corpus_".to_string(),
            index_retry_limit: 3,
            id_suffix_len: 7,
            id_collision_retries: 4,
        }
    }
}

impl RegistryConfig {
    /// Config for tests: same key layout, tighter retry bounds.
    pub fn for_testing() -> Self {
        Self {
            index_retry_limit: 1,
            id_collision_retries: 1,
            ..Self::default()
        }
    }
}
