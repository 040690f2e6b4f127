//! # Acceptance Scenarios
//!
//! End-to-end flows exercising submission, review authorization, filtering,
//! pagination, and the reveal gate through the public engine API, with the
//! in-memory vault standing in for the shared store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cv_engine::views;
    use cv_registry::MemoryVault;
    use cv_engine::ScriptedIdentity;
    use shared_types::{CorpusRecord, Identity, RecordStatus, RegistryError};

    use crate::integration::fixtures::{draft, init_tracing, session, session_with_clock};

    // =============================================================================
    // SCENARIO A: submission appears once, pending, correctly owned
    // =============================================================================

    #[tokio::test]
    async fn scenario_a_submission_is_pending_and_owned() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let mut engine = session(vault, Arc::new(ScriptedIdentity::with_identity("0xA11CE")));

        engine
            .submit(&draft("Ainu", "Japan", "irankarapte"))
            .await
            .unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].status, RecordStatus::Pending);
        assert_eq!(snapshot[0].owner, Identity::new("0xa11ce"));
        assert_eq!(snapshot[0].language, "Ainu");
        assert_eq!(snapshot[0].region, "Japan");
    }

    // =============================================================================
    // SCENARIO B: review is owner-only across sessions
    // =============================================================================

    #[tokio::test]
    async fn scenario_b_transition_by_other_identity_is_unauthorized() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());

        let mut session1 = session(
            vault.clone(),
            Arc::new(ScriptedIdentity::with_identity("0x01")),
        );
        let mut session2 = session(
            vault.clone(),
            Arc::new(ScriptedIdentity::with_identity("0x02")),
        );

        let record1 = session1
            .submit(&draft("Ainu", "Japan", "first sample"))
            .await
            .unwrap();
        session2
            .submit(&draft("Sami", "Norway", "second sample"))
            .await
            .unwrap();

        // The other identity may not review identity1's record.
        let err = session2
            .transition(&record1.id, RecordStatus::Verified)
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized);

        // The owner may.
        let verified = session1
            .transition(&record1.id, RecordStatus::Verified)
            .await
            .unwrap();
        assert_eq!(verified.status, RecordStatus::Verified);

        // Both sessions converge on the reviewed state.
        session2.refresh().await.unwrap();
        let seen = session2
            .snapshot()
            .iter()
            .find(|r| r.id == record1.id)
            .unwrap();
        assert_eq!(seen.status, RecordStatus::Verified);
    }

    // =============================================================================
    // SCENARIO C: case-insensitive filtering
    // =============================================================================

    #[tokio::test]
    async fn scenario_c_filter_matches_case_insensitively() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let mut engine = session(vault, Arc::new(ScriptedIdentity::with_identity("0xAA")));

        engine.submit(&draft("Ainu", "Japan", "x")).await.unwrap();
        engine.submit(&draft("Sami", "Norway", "y")).await.unwrap();

        let hits = views::filter(engine.snapshot(), "ainu");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].language, "Ainu");
    }

    // =============================================================================
    // SCENARIO D: pagination windows and out-of-range pages
    // =============================================================================

    fn numbered_records(count: usize) -> Vec<CorpusRecord> {
        (1..=count)
            .map(|n| CorpusRecord {
                id: format!("{n}-record"),
                encrypted_payload: String::new(),
                created_at: n as u64,
                owner: Identity::new("0xaa"),
                language: format!("language-{n}"),
                region: "somewhere".to_string(),
                status: RecordStatus::Pending,
            })
            .collect()
    }

    #[test]
    fn scenario_d_pagination_windows() {
        let filtered = numbered_records(7);

        let last_page = views::paginate(&filtered, 5, 1);
        let ids: Vec<&str> = last_page.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["6-record", "7-record"]);

        assert!(views::paginate(&filtered, 5, 2).is_empty());
        assert_eq!(views::page_count(filtered.len(), 5), 2);
    }

    #[tokio::test]
    async fn scenario_d_engine_pages_with_configured_size() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let (mut engine, clock) = session_with_clock(
            vault,
            Arc::new(ScriptedIdentity::with_identity("0xAA")),
        );
        for n in 0..7 {
            clock.advance_millis(1_000);
            engine
                .submit(&draft(&format!("language-{n}"), "somewhere", "text"))
                .await
                .unwrap();
        }

        // Default page size is 5: a full first page, two on the second.
        assert_eq!(engine.page("", 0).len(), 5);
        assert_eq!(engine.page("", 1).len(), 2);
        assert!(engine.page("", 2).is_empty());
    }

    // =============================================================================
    // SCENARIO E: declined signature denies the reveal, payload untouched
    // =============================================================================

    #[tokio::test]
    async fn scenario_e_declined_signature_is_denied() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let identity = Arc::new(ScriptedIdentity::with_identity("0xAA"));
        let mut engine = session(vault, identity.clone());

        let record = engine
            .submit(&draft("Ainu", "Japan", "guarded content"))
            .await
            .unwrap();
        let payload_before = record.encrypted_payload.clone();

        identity.set_decline(true);
        let err = engine.reveal(&record.id).await.unwrap_err();
        assert_eq!(err, RegistryError::Denied);

        // The stored payload is unchanged and still sealed.
        engine.refresh().await.unwrap();
        let stored = engine
            .snapshot()
            .iter()
            .find(|r| r.id == record.id)
            .unwrap();
        assert_eq!(stored.encrypted_payload, payload_before);
        assert!(stored.encrypted_payload.starts_with("FHE-"));

        // Consent withdrawn is not permanent: signing again succeeds.
        identity.set_decline(false);
        assert!(engine.reveal(&record.id).await.is_ok());
    }
}
