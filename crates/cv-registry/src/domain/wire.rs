//! # Wire Formats
//!
//! The JSON shapes stored under vault keys. Both are UTF-8 JSON so any party
//! can inspect the vault without this crate.
//!
//! - A record lives at `corpus_<id>` as a [`StoredRecord`].
//! - The index lives at `corpus_keys` as a [`StoredIndex`]; a bare JSON
//!   array of ids (the legacy form) is also accepted on read.

use serde::{Deserialize, Serialize};
use shared_types::{CorpusRecord, Identity, RecordStatus, RegistryError};

/// Stored form of one record.
///
/// Field names are the vault wire format; `data` is the envelope-encoded
/// payload. A missing `status` decodes as `pending` (tolerant reader: early
/// writers omitted the field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Envelope-encoded payload.
    pub data: String,
    /// Creation time, unix seconds.
    pub timestamp: u64,
    /// Creator identity.
    pub owner: Identity,
    /// Language name.
    pub language: String,
    /// Geographical region.
    #[serde(default)]
    pub region: String,
    /// Review status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl StoredRecord {
    /// Attach an id to produce the in-memory record.
    pub fn into_record(self, id: String) -> CorpusRecord {
        CorpusRecord {
            id,
            encrypted_payload: self.data,
            created_at: self.timestamp,
            owner: self.owner,
            language: self.language,
            region: self.region,
            status: self.status,
        }
    }

    /// Serialize to vault bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        serde_json::to_vec(self).map_err(|e| RegistryError::MalformedData {
            context: format!("encoding record: {e}"),
        })
    }

    /// Deserialize from vault bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryError> {
        serde_json::from_slice(bytes).map_err(|e| RegistryError::MalformedData {
            context: format!("decoding record: {e}"),
        })
    }
}

impl From<&CorpusRecord> for StoredRecord {
    fn from(record: &CorpusRecord) -> Self {
        Self {
            data: record.encrypted_payload.clone(),
            timestamp: record.created_at,
            owner: record.owner.clone(),
            language: record.language.clone(),
            region: record.region.clone(),
            status: record.status,
        }
    }
}

/// Stored form of the index: every known record id plus a version stamp
/// bumped on each append, used by the bounded read-modify-write loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredIndex {
    /// Monotonic write counter (not globally authoritative under races).
    pub version: u64,
    /// Record ids in insertion order.
    pub ids: Vec<String>,
}

impl StoredIndex {
    /// Serialize to vault bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        serde_json::to_vec(self).map_err(|e| RegistryError::MalformedData {
            context: format!("encoding index: {e}"),
        })
    }

    /// Tolerant decode: the versioned wrapper, or a bare array of ids
    /// (legacy form, mapped to version 0).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryError> {
        if let Ok(index) = serde_json::from_slice::<StoredIndex>(bytes) {
            return Ok(index);
        }
        serde_json::from_slice::<Vec<String>>(bytes)
            .map(|ids| StoredIndex { version: 0, ids })
            .map_err(|e| RegistryError::MalformedData {
                context: format!("decoding index: {e}"),
            })
    }
}

/// Cleartext payload carried inside the envelope: the contributor content
/// plus a creation timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearPayload {
    /// Language name, duplicated into the sealed payload.
    pub language: String,
    /// Region, duplicated into the sealed payload.
    pub region: String,
    /// The corpus sample itself.
    pub content: String,
    /// Creation time, unix milliseconds.
    pub timestamp: u64,
}

impl ClearPayload {
    /// Serialize to the bytes handed to the envelope codec.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        serde_json::to_vec(self).map_err(|e| RegistryError::MalformedData {
            context: format!("encoding payload: {e}"),
        })
    }

    /// Parse payload bytes produced by a reveal.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryError> {
        serde_json::from_slice(bytes).map_err(|e| RegistryError::MalformedData {
            context: format!("decoding payload: {e}"),
        })
    }
}
