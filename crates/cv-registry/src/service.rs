//! # Record Store Service
//!
//! Application service implementing the registry operations: index
//! maintenance, record CRUD, and the status workflow.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Uses the outbound ports (`DataVault`, `Clock`)
//! - Delegates codec/wire concerns to the domain layer
//! - Owns the consistency between "id exists in index" and "id resolves to a
//!   record" jointly with the index half of this service

use crate::config::RegistryConfig;
use crate::domain::envelope;
use crate::domain::id::generate_record_id;
use crate::domain::wire::{ClearPayload, StoredIndex, StoredRecord};
use crate::ports::{Clock, DataVault};
use shared_types::{CorpusRecord, Identity, RecordDraft, RecordStatus, RegistryError};
use std::sync::Arc;

/// Result of one bulk load: the decoded records plus how many indexed ids
/// were skipped as missing or malformed.
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    /// Records ordered by `created_at` descending.
    pub records: Vec<CorpusRecord>,
    /// Indexed ids that did not resolve to a readable record.
    pub skipped: usize,
}

/// Record Store - registry operations over a `DataVault`.
pub struct RecordStore<V: DataVault, C: Clock> {
    vault: Arc<V>,
    clock: C,
    config: RegistryConfig,
}

impl<V: DataVault, C: Clock> RecordStore<V, C> {
    /// Create a store over a vault.
    pub fn new(vault: Arc<V>, clock: C, config: RegistryConfig) -> Self {
        Self {
            vault,
            clock,
            config,
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Availability probe, delegated to the vault.
    pub async fn is_available(&self) -> bool {
        self.vault.is_available().await
    }

    fn record_key(&self, id: &str) -> String {
        format!("{}{}", self.config.record_key_prefix, id)
    }

    // -------------------------------------------------------------------------
    // Index manager
    // -------------------------------------------------------------------------

    /// Load the index in stored form. Absent or unparsable payloads yield an
    /// empty index (fail soft); transport errors propagate.
    async fn load_stored_index(&self) -> Result<StoredIndex, RegistryError> {
        let Some(bytes) = self.vault.read(&self.config.index_key).await? else {
            return Ok(StoredIndex::default());
        };
        if bytes.is_empty() {
            return Ok(StoredIndex::default());
        }
        match StoredIndex::from_bytes(&bytes) {
            Ok(index) => Ok(index),
            Err(e) => {
                tracing::warn!(error = %e, "unparsable index payload, treating as empty");
                Ok(StoredIndex::default())
            }
        }
    }

    /// All known record ids, in insertion order as observed by this session.
    pub async fn load_index(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self.load_stored_index().await?.ids)
    }

    /// Append an id to the index via versioned read-modify-write.
    ///
    /// The write is followed by a read-back; if the appended id is not
    /// visible (a concurrent writer based its write on the same snapshot and
    /// overwrote ours), the append is retried up to the configured bound.
    /// This narrows the lost-update window; without compare-and-swap in the
    /// vault contract it cannot close it.
    ///
    /// Appending an id that is already present is a no-op.
    pub async fn append_to_index(&self, id: &str) -> Result<(), RegistryError> {
        for attempt in 0..=self.config.index_retry_limit {
            let mut index = self.load_stored_index().await?;
            if index.ids.iter().any(|existing| existing == id) {
                return Ok(());
            }
            index.ids.push(id.to_string());
            index.version += 1;
            self.vault
                .write(&self.config.index_key, &index.to_bytes()?)
                .await?;

            let after = self.load_stored_index().await?;
            if after.ids.iter().any(|existing| existing == id) {
                return Ok(());
            }
            tracing::warn!(%id, attempt, "index append lost on read-back, retrying");
        }
        Err(RegistryError::Inconsistent { id: id.to_string() })
    }

    // -------------------------------------------------------------------------
    // Record CRUD
    // -------------------------------------------------------------------------

    /// Generate an id and verify it does not already resolve to a record.
    async fn allocate_id(&self) -> Result<String, RegistryError> {
        for _ in 0..=self.config.id_collision_retries {
            let id = generate_record_id(self.clock.now_millis(), self.config.id_suffix_len);
            if self.vault.read(&self.record_key(&id)).await?.is_none() {
                return Ok(id);
            }
            tracing::warn!(%id, "generated record id already exists, regenerating");
        }
        Err(RegistryError::NotAvailable(
            "could not allocate an unused record id".to_string(),
        ))
    }

    /// Create a record from a draft: seal the payload, store it under a
    /// fresh id with `pending` status, then index the id.
    ///
    /// # Errors
    /// - `NotAvailable` - vault unreachable, or no unused id could be found
    /// - `Inconsistent` - the record was written but the index append
    ///   failed; the record exists yet is undiscoverable via enumeration
    pub async fn create_record(
        &self,
        draft: &RecordDraft,
        owner: &Identity,
    ) -> Result<CorpusRecord, RegistryError> {
        let id = self.allocate_id().await?;
        let payload = ClearPayload {
            language: draft.language.clone(),
            region: draft.region.clone(),
            content: draft.content.clone(),
            timestamp: self.clock.now_millis(),
        };
        let stored = StoredRecord {
            data: envelope::encode(&payload.to_bytes()?),
            timestamp: self.clock.now_secs(),
            owner: owner.clone(),
            language: draft.language.clone(),
            region: draft.region.clone(),
            status: RecordStatus::Pending,
        };
        self.vault
            .write(&self.record_key(&id), &stored.to_bytes()?)
            .await?;

        if let Err(e) = self.append_to_index(&id).await {
            tracing::error!(%id, error = %e, "record stored but index append failed");
            return Err(RegistryError::Inconsistent { id });
        }

        tracing::info!(%id, language = %draft.language, "record created");
        Ok(stored.into_record(id))
    }

    /// Load one record by id. Absent keys and malformed payloads both
    /// surface as `NotFound` (fail soft); transport errors propagate.
    pub async fn load_record(&self, id: &str) -> Result<CorpusRecord, RegistryError> {
        let Some(bytes) = self.vault.read(&self.record_key(id)).await? else {
            return Err(RegistryError::NotFound(id.to_string()));
        };
        match StoredRecord::from_bytes(&bytes) {
            Ok(stored) => Ok(stored.into_record(id.to_string())),
            Err(e) => {
                tracing::warn!(%id, error = %e, "malformed record payload");
                Err(RegistryError::NotFound(id.to_string()))
            }
        }
    }

    /// Load every indexed record, skipping unreadable items, with skip
    /// statistics for synchronization reporting.
    ///
    /// Per-item faults are isolated and logged; a vault outage mid-pass
    /// aborts the whole load.
    pub async fn collect(&self) -> Result<RecordBatch, RegistryError> {
        let ids = self.load_index().await?;
        let mut batch = RecordBatch::default();
        for id in ids {
            match self.load_record(&id).await {
                Ok(record) => batch.records.push(record),
                Err(e @ RegistryError::NotAvailable(_)) => return Err(e),
                Err(e) => {
                    batch.skipped += 1;
                    tracing::warn!(%id, error = %e, "skipping unreadable record");
                }
            }
        }
        batch
            .records
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(batch)
    }

    /// Load every indexed record, ordered by `created_at` descending.
    pub async fn load_all(&self) -> Result<Vec<CorpusRecord>, RegistryError> {
        Ok(self.collect().await?.records)
    }

    // -------------------------------------------------------------------------
    // Status workflow
    // -------------------------------------------------------------------------

    /// Move a record to a terminal review status.
    ///
    /// Legal only from `pending`; the id stays in the index (no index
    /// mutation). Concurrent transitions on one record are last-write-wins;
    /// ownership is enforced by the calling layer.
    ///
    /// # Errors
    /// - `NotFound` - id does not resolve
    /// - `InvalidTransition` - record is not `pending`, or target is not a
    ///   terminal status
    pub async fn transition(
        &self,
        id: &str,
        target: RecordStatus,
    ) -> Result<CorpusRecord, RegistryError> {
        let mut record = self.load_record(id).await?;
        if !record.status.can_transition_to(target) {
            return Err(RegistryError::InvalidTransition {
                from: record.status,
                to: target,
            });
        }
        record.status = target;
        let stored = StoredRecord::from(&record);
        self.vault
            .write(&self.record_key(id), &stored.to_bytes()?)
            .await?;
        tracing::info!(%id, status = %target, "record status updated");
        Ok(record)
    }
}
