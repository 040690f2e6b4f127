//! # Reveal Gate with a Real Wallet
//!
//! The signature gate end-to-end: an ed25519-backed wallet signs the session
//! challenge, the envelope decodes, and the recovered payload matches what
//! the contributor submitted. Also checks the challenge is verifier-friendly:
//! deterministic bytes that the wallet's own key can verify a signature over.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cv_engine::{
        session, EngineConfig, IdentityProvider, LocalWallet, NoDelay, RegistryEngine,
        ScriptedIdentity,
    };
    use cv_registry::{ClearPayload, FixedClock, MemoryVault, RecordStore, RegistryConfig};
    use shared_types::RegistryError;

    use crate::integration::fixtures::{self, draft, init_tracing};

    fn wallet_session(
        vault: Arc<MemoryVault>,
        wallet: Arc<LocalWallet>,
    ) -> RegistryEngine<MemoryVault, FixedClock, LocalWallet, NoDelay> {
        let store = RecordStore::new(
            vault,
            FixedClock::at_millis(1_722_000_000_000),
            RegistryConfig::default(),
        );
        RegistryEngine::new(
            store,
            wallet,
            NoDelay,
            fixtures::session_context(),
            EngineConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_wallet_reveal_round_trips_submission() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());
        let wallet = Arc::new(LocalWallet::from_seed([42u8; 32]));
        let mut engine = wallet_session(vault, wallet.clone());

        let record = engine
            .submit(&draft("Ainu", "Japan", "irankarapte, a greeting"))
            .await
            .unwrap();
        assert_eq!(record.owner, *wallet.identity());

        let plaintext = engine.reveal(&record.id).await.unwrap();
        let payload = ClearPayload::from_bytes(&plaintext).unwrap();
        assert_eq!(payload.language, "Ainu");
        assert_eq!(payload.region, "Japan");
        assert_eq!(payload.content, "irankarapte, a greeting");
        assert_eq!(payload.timestamp, 1_722_000_000_000);
    }

    #[tokio::test]
    async fn test_challenge_signature_verifies_out_of_band() {
        init_tracing();
        let wallet = LocalWallet::from_seed([7u8; 32]);
        let ctx = fixtures::session_context();

        // A verifier reconstructing the challenge gets identical bytes.
        let challenge = session::build_challenge(&ctx);
        assert_eq!(challenge, session::build_challenge(&ctx));

        let signature_bytes = wallet.sign_message(&challenge).await.unwrap();
        let signature = ed25519_dalek::Signature::from_slice(&signature_bytes).unwrap();
        ed25519_dalek::Verifier::verify(
            &wallet.verifying_key(),
            challenge.as_bytes(),
            &signature,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_anonymous_session_cannot_reveal() {
        init_tracing();
        let vault = Arc::new(MemoryVault::new());

        // A wallet session contributes; an anonymous session syncs it.
        let wallet = Arc::new(LocalWallet::generate());
        let mut contributor = wallet_session(vault.clone(), wallet);
        let record = contributor
            .submit(&draft("Sami", "Norway", "hidden"))
            .await
            .unwrap();

        let mut anonymous =
            fixtures::session(vault, Arc::new(ScriptedIdentity::anonymous()));
        anonymous.refresh().await.unwrap();

        let err = anonymous.reveal(&record.id).await.unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized);
    }
}
