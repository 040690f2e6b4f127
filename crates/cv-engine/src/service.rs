//! # Registry Engine
//!
//! Application service orchestrating one client session: submission, review,
//! reveal, and full-pass synchronization of the in-memory snapshot.
//!
//! ## Concurrency model
//!
//! One logical actor per session: vault I/O and signature requests are
//! awaited sequentially, never raced against each other from the same
//! session. Cross-session races (two contributors writing at once) are the
//! registry's documented index and transition hazards; the engine adds no
//! locking because the vault offers no primitive to lock with.
//!
//! Synchronization passes carry a monotonically increasing pass number; a
//! pass only installs its snapshot if no later pass has installed first, so
//! a superseded pass's result is discarded rather than clobbering newer
//! state. A failed pass retains the prior snapshot.

use crate::config::EngineConfig;
use crate::ports::{DelayPolicy, IdentityProvider, PausePhase};
use crate::reveal;
use crate::session::SessionContext;
use crate::views::{self, StatusCounts};
use cv_registry::{Clock, DataVault, RecordStore};
use shared_types::{CorpusRecord, RecordDraft, RecordStatus, RegistryError};
use std::sync::Arc;

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Pass number (monotonic per engine).
    pub pass: u64,
    /// Records loaded into the snapshot.
    pub loaded: usize,
    /// Indexed ids skipped as missing or malformed.
    pub skipped: usize,
}

/// Registry Engine - one client session over the shared vault.
pub struct RegistryEngine<V, C, P, D>
where
    V: DataVault,
    C: Clock,
    P: IdentityProvider,
    D: DelayPolicy,
{
    store: RecordStore<V, C>,
    identity: Arc<P>,
    delay: D,
    context: SessionContext,
    config: EngineConfig,
    /// In-memory snapshot; mutated only by `refresh`.
    snapshot: Vec<CorpusRecord>,
    /// Pass number of the snapshot currently installed.
    installed_pass: u64,
    /// Passes started so far.
    started_passes: u64,
}

impl<V, C, P, D> RegistryEngine<V, C, P, D>
where
    V: DataVault,
    C: Clock,
    P: IdentityProvider,
    D: DelayPolicy,
{
    /// Create an engine with an empty snapshot.
    pub fn new(
        store: RecordStore<V, C>,
        identity: Arc<P>,
        delay: D,
        context: SessionContext,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            identity,
            delay,
            context,
            config,
            snapshot: Vec::new(),
            installed_pass: 0,
            started_passes: 0,
        }
    }

    /// The session context the reveal protocol signs over.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current snapshot (result of the last completed sync pass).
    pub fn snapshot(&self) -> &[CorpusRecord] {
        &self.snapshot
    }

    /// Pass number of the installed snapshot; 0 before the first sync.
    pub fn installed_pass(&self) -> u64 {
        self.installed_pass
    }

    // -------------------------------------------------------------------------
    // Synchronization
    // -------------------------------------------------------------------------

    /// Run one full synchronization pass and install its snapshot.
    ///
    /// # Errors
    /// `NotAvailable` - the vault is unreachable or reports itself down; the
    /// prior snapshot is retained.
    pub async fn refresh(&mut self) -> Result<SyncReport, RegistryError> {
        self.started_passes += 1;
        let pass = self.started_passes;

        if !self.store.is_available().await {
            return Err(RegistryError::NotAvailable(
                "vault reports unavailable".to_string(),
            ));
        }

        let batch = self.store.collect().await?;
        let report = SyncReport {
            pass,
            loaded: batch.records.len(),
            skipped: batch.skipped,
        };

        if pass > self.installed_pass {
            self.snapshot = batch.records;
            self.installed_pass = pass;
            tracing::debug!(
                pass,
                loaded = report.loaded,
                skipped = report.skipped,
                "snapshot installed"
            );
        } else {
            tracing::debug!(pass, "sync pass superseded, result discarded");
        }
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Submit a new corpus entry owned by the active identity.
    ///
    /// # Errors
    /// - `Unauthorized` - no active identity; surfaced before any vault call
    /// - `Inconsistent` - stored but not indexed (see `cv-registry`)
    pub async fn submit(&mut self, draft: &RecordDraft) -> Result<CorpusRecord, RegistryError> {
        let owner = self
            .identity
            .current_identity()
            .ok_or(RegistryError::Unauthorized)?;
        let record = self.store.create_record(draft, &owner).await?;
        self.refresh_after_write("submit").await;
        Ok(record)
    }

    /// Move a record owned by the caller to a terminal review status.
    ///
    /// # Errors
    /// - `Unauthorized` - no active identity, or caller is not the owner
    /// - `NotFound` / `InvalidTransition` - per the record store
    pub async fn transition(
        &mut self,
        id: &str,
        target: RecordStatus,
    ) -> Result<CorpusRecord, RegistryError> {
        let caller = self
            .identity
            .current_identity()
            .ok_or(RegistryError::Unauthorized)?;

        self.delay.pause(PausePhase::BeforeReview).await;

        let record = self.store.load_record(id).await?;
        if !record.is_owned_by(&caller) {
            tracing::warn!(%id, caller = %caller, "transition refused: caller is not the owner");
            return Err(RegistryError::Unauthorized);
        }

        let updated = self.store.transition(id, target).await?;
        self.refresh_after_write("transition").await;
        Ok(updated)
    }

    /// Refresh after a successful mutation. Failure to resynchronize does
    /// not undo the mutation, so it is logged rather than propagated.
    async fn refresh_after_write(&mut self, operation: &str) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(operation, error = %e, "post-write refresh failed, snapshot is stale");
        }
    }

    // -------------------------------------------------------------------------
    // Reveal
    // -------------------------------------------------------------------------

    /// Reveal the plaintext of a snapshot record via the signature gate.
    ///
    /// # Errors
    /// - `NotFound` - id not in the snapshot
    /// - `Unauthorized` / `Denied` / `MalformedData` - per the reveal protocol
    pub async fn reveal(&self, id: &str) -> Result<Vec<u8>, RegistryError> {
        let record = self
            .snapshot
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let plaintext = reveal::request_reveal(self.identity.as_ref(), &self.context, record).await?;
        self.delay.pause(PausePhase::AfterSignature).await;
        Ok(plaintext)
    }

    // -------------------------------------------------------------------------
    // Read-side views
    // -------------------------------------------------------------------------

    /// One page of the filtered snapshot, using the configured page size.
    pub fn page(&self, term: &str, page_index: usize) -> Vec<&CorpusRecord> {
        let filtered = views::filter(&self.snapshot, term);
        views::paginate(&filtered, self.config.page_size, page_index).to_vec()
    }

    /// Per-status counts over the snapshot.
    pub fn stats(&self) -> StatusCounts {
        views::status_counts(&self.snapshot)
    }
}
