//! # Session Context & Challenge
//!
//! The per-session parameters the reveal protocol signs over, held in an
//! explicit struct constructed once at startup and passed by reference,
//! never read from ambient globals.
//!
//! The challenge is a deterministic, human-readable rendering of the context.
//! Its field labels are a wire format: an external verifier reconstructing
//! the expected message must produce the identical byte sequence, so the
//! labels and their order are fixed even where this crate's own terminology
//! differs.

use rand::Rng;

const HEX: &[u8] = b"0123456789abcdef";

/// Length, in hex characters, of the generated public key material.
pub const KEY_MATERIAL_HEX_LEN: usize = 2000;

/// Stable per-session context for the reveal protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Session public key material, `0x`-prefixed hex.
    pub public_key_material: String,
    /// Identifier of the vault endpoint records are stored behind.
    pub vault_endpoint: String,
    /// Network the endpoint lives on.
    pub network_id: u64,
    /// Start of the validity window, unix seconds.
    pub window_start: u64,
    /// Validity window length in days.
    pub window_days: u64,
}

impl SessionContext {
    /// Build a context with freshly generated key material.
    pub fn generate(
        vault_endpoint: impl Into<String>,
        network_id: u64,
        window_start: u64,
        window_days: u64,
    ) -> Self {
        Self {
            public_key_material: generate_key_material(),
            vault_endpoint: vault_endpoint.into(),
            network_id,
            window_start,
            window_days,
        }
    }
}

/// `0x` followed by [`KEY_MATERIAL_HEX_LEN`] random lowercase hex characters.
fn generate_key_material() -> String {
    let mut rng = rand::thread_rng();
    let mut material = String::with_capacity(2 + KEY_MATERIAL_HEX_LEN);
    material.push_str("0x");
    for _ in 0..KEY_MATERIAL_HEX_LEN {
        material.push(HEX[rng.gen_range(0..HEX.len())] as char);
    }
    material
}

/// Render the deterministic challenge for a context.
///
/// Newline-separated `label:value` lines in fixed order; byte-identical for
/// repeated calls on an unchanged context.
pub fn build_challenge(ctx: &SessionContext) -> String {
    format!(
        "publickey:{}\ncontractAddresses:{}\ncontractsChainId:{}\nstartTimestamp:{}\ndurationDays:{}",
        ctx.public_key_material,
        ctx.vault_endpoint,
        ctx.network_id,
        ctx.window_start,
        ctx.window_days,
    )
}
