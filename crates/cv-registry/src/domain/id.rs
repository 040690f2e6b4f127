//! # Record Id Generation
//!
//! Ids have the form `<decimal-millis-timestamp>-<base36-random-suffix>`.
//! Collision probability is negligible, not zero; the record store verifies
//! non-existence before accepting a generated id.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh record id from a millisecond timestamp and a random
/// base36 suffix of `suffix_len` characters.
pub fn generate_record_id(now_millis: u64, suffix_len: usize) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..suffix_len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{now_millis}-{suffix}")
}
