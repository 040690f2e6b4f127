//! # Reveal Protocol
//!
//! Gates decoding of a record's payload behind proof that the requester
//! controls the session identity, without a server round-trip.
//!
//! The flow is: active identity check, deterministic challenge, signature
//! request, and (only on success) envelope decode. The signature is not
//! persisted and there is no verifier collaborator; this is a local
//! consent/proof-of-control gate (trust-on-first-use), not a cryptographic
//! access-control guarantee. A declined or failed signature yields `Denied`,
//! never a partial reveal, and nothing is cached: every hide/show cycle goes
//! through the gate again.

use crate::ports::{IdentityProvider, SignError};
use crate::session::{build_challenge, SessionContext};
use cv_registry::envelope;
use shared_types::{CorpusRecord, RegistryError};

/// Reveal a record's plaintext after a successful signature over the
/// session challenge.
///
/// # Errors
/// - `Unauthorized` - no active identity; surfaced before any signing attempt
/// - `Denied` - the signature step was declined or failed
/// - `MalformedData` - the payload's envelope body does not decode
pub async fn request_reveal<P: IdentityProvider + ?Sized>(
    provider: &P,
    ctx: &SessionContext,
    record: &CorpusRecord,
) -> Result<Vec<u8>, RegistryError> {
    if provider.current_identity().is_none() {
        return Err(RegistryError::Unauthorized);
    }

    let challenge = build_challenge(ctx);
    match provider.sign_message(&challenge).await {
        Ok(signature) => {
            tracing::debug!(
                record = %record.id,
                signature_len = signature.len(),
                "reveal signature obtained"
            );
            envelope::decode(&record.encrypted_payload)
        }
        Err(SignError::Declined) => Err(RegistryError::Denied),
        Err(SignError::Failed(reason)) => {
            tracing::warn!(record = %record.id, %reason, "reveal signature failed");
            Err(RegistryError::Denied)
        }
    }
}
