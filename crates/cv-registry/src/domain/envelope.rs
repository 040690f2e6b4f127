//! # Envelope Codec
//!
//! Reversible encoding of a record payload into the opaque string stored in
//! the vault. The codec is byte-content-agnostic: callers serialize
//! structured fields to bytes before encoding and parse them back after
//! decoding.
//!
//! This module is an abstraction boundary. The placeholder transform is a
//! fixed literal prefix over standard base64; swapping a real encryption
//! primitive in must not require any change to callers. Input lacking the
//! prefix is treated as already-plaintext for backward compatibility with
//! unencoded payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use shared_types::RegistryError;

/// Literal prefix marking an encoded envelope.
pub const ENVELOPE_PREFIX: &str = "FHE-";

/// Encode plaintext bytes into an opaque envelope string.
pub fn encode(plaintext: &[u8]) -> String {
    format!("{ENVELOPE_PREFIX}{}", STANDARD.encode(plaintext))
}

/// Decode an envelope string back to plaintext bytes.
///
/// `decode(encode(x)) == x` for all byte sequences `x`. Input without the
/// envelope prefix is returned unchanged as bytes.
///
/// # Errors
/// `MalformedData` if the prefixed body is not valid base64.
pub fn decode(encoded: &str) -> Result<Vec<u8>, RegistryError> {
    match encoded.strip_prefix(ENVELOPE_PREFIX) {
        Some(body) => STANDARD
            .decode(body)
            .map_err(|e| RegistryError::MalformedData {
                context: format!("envelope body: {e}"),
            }),
        None => Ok(encoded.as_bytes().to_vec()),
    }
}
