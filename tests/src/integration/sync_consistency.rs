//! # Index/Record Consistency
//!
//! Integrity of the single-key index against the records it references:
//! sequential growth, cross-session visibility, fail-soft bulk loads, and
//! the detect-and-report behaviour when a record is stored but not indexed.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cv_engine::ScriptedIdentity;
    use cv_registry::{
        DataVault, FixedClock, MemoryVault, RecordStore, RegistryConfig, StoredIndex,
    };
    use shared_types::{Identity, RegistryError};

    use crate::integration::fixtures::{draft, init_tracing, session, session_with_clock};

    fn bare_store(vault: Arc<MemoryVault>) -> RecordStore<MemoryVault, FixedClock> {
        RecordStore::new(
            vault,
            FixedClock::at_millis(1_722_000_000_000),
            RegistryConfig::default(),
        )
    }

    // =============================================================================
    // SEQUENTIAL SINGLE-WRITER INTEGRITY
    // =============================================================================

    #[tokio::test]
    async fn test_index_tracks_n_sequential_submissions() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let (mut engine, clock) = session_with_clock(
            vault.clone(),
            Arc::new(ScriptedIdentity::with_identity("0xAA")),
        );

        const N: usize = 8;
        for n in 0..N {
            clock.advance_millis(1_000);
            engine
                .submit(&draft(&format!("language-{n}"), "somewhere", "text"))
                .await
                .unwrap();
        }

        let store = bare_store(vault);
        let index = store.load_index().await.unwrap();
        assert_eq!(index.len(), N);
        for id in &index {
            store.load_record(id).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_snapshot_orders_newest_first() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let (mut engine, clock) = session_with_clock(
            vault,
            Arc::new(ScriptedIdentity::with_identity("0xAA")),
        );

        let older = engine.submit(&draft("Ainu", "Japan", "a")).await.unwrap();
        clock.advance_millis(10_000);
        let newer = engine.submit(&draft("Sami", "Norway", "b")).await.unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot[0].id, newer.id);
        assert_eq!(snapshot[1].id, older.id);
    }

    // =============================================================================
    // CROSS-SESSION VISIBILITY
    // =============================================================================

    #[tokio::test]
    async fn test_second_session_sees_first_sessions_records() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let mut writer = session(
            vault.clone(),
            Arc::new(ScriptedIdentity::with_identity("0x01")),
        );
        let mut reader = session(vault, Arc::new(ScriptedIdentity::with_identity("0x02")));

        let record = writer
            .submit(&draft("Yuchi", "United States", "sample"))
            .await
            .unwrap();

        let report = reader.refresh().await.unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(reader.snapshot()[0].id, record.id);
        assert_eq!(reader.snapshot()[0].owner, Identity::new("0x01"));
    }

    // =============================================================================
    // FAIL-SOFT BULK LOADS
    // =============================================================================

    #[tokio::test]
    async fn test_malformed_record_is_skipped_not_fatal() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let mut engine = session(
            vault.clone(),
            Arc::new(ScriptedIdentity::with_identity("0xAA")),
        );
        engine.submit(&draft("Ainu", "Japan", "good")).await.unwrap();

        // Plant a corrupt record behind a valid index entry.
        let store = bare_store(vault.clone());
        vault
            .as_ref()
            .write("corpus_99-corrupt", b"\xff\xfenot json")
            .await
            .unwrap();
        store.append_to_index("99-corrupt").await.unwrap();

        let report = engine.refresh().await.unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 1);
    }

    #[tokio::test]
    async fn test_legacy_bare_array_index_is_readable() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let store = bare_store(vault.clone());

        // A record written by an old client that stored the index as a bare
        // JSON array of ids.
        let record = store
            .create_record(
                &draft("Ainu", "Japan", "legacy"),
                &Identity::new("0xaa"),
            )
            .await
            .unwrap();
        let ids = store.load_index().await.unwrap();
        vault
            .as_ref()
            .write("corpus_keys", serde_json::to_vec(&ids).unwrap().as_slice())
            .await
            .unwrap();

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);

        // The next append upgrades the payload to the versioned form.
        store.append_to_index("1-upgraded").await.unwrap();
        let raw = vault.as_ref().read("corpus_keys").await.unwrap().unwrap();
        let upgraded = StoredIndex::from_bytes(&raw).unwrap();
        assert_eq!(upgraded.version, 1);
        assert_eq!(upgraded.ids.len(), 2);
    }

    // =============================================================================
    // DETECTED INCONSISTENCY
    // =============================================================================

    #[tokio::test]
    async fn test_unindexed_record_is_reported_and_recoverable() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let store = bare_store(vault.clone());

        // The record write succeeds, every index write fails.
        vault.fail_writes_after(1, 100);
        let err = store
            .create_record(&draft("Ainu", "Japan", "orphan"), &Identity::new("0xaa"))
            .await
            .unwrap_err();
        let RegistryError::Inconsistent { id } = err else {
            panic!("expected Inconsistent, got {err}");
        };

        // Undiscoverable via enumeration, but not lost.
        vault.fail_writes_after(0, 0);
        assert!(store.load_all().await.unwrap().is_empty());
        assert!(store.load_record(&id).await.is_ok());

        // Re-appending the reported id repairs discoverability.
        store.append_to_index(&id).await.unwrap();
        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
    }

    // =============================================================================
    // OUTAGE HANDLING
    // =============================================================================

    #[tokio::test]
    async fn test_outage_aborts_sync_and_retains_snapshot() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let mut engine = session(
            vault.clone(),
            Arc::new(ScriptedIdentity::with_identity("0xAA")),
        );
        engine.submit(&draft("Ainu", "Japan", "kept")).await.unwrap();

        vault.set_available(false);
        let err = engine.refresh().await.unwrap_err();
        assert!(matches!(err, RegistryError::NotAvailable(_)));
        assert_eq!(engine.snapshot().len(), 1);

        // Recovery: the next pass after the outage installs normally.
        vault.set_available(true);
        let report = engine.refresh().await.unwrap();
        assert_eq!(report.loaded, 1);
    }
}
