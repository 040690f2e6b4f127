//! # View Projections
//!
//! Pure functions over the synchronized snapshot: filtering, pagination, and
//! aggregation. No I/O, O(n) in snapshot size, and nothing here mutates the
//! snapshot. Applied twice to an unchanged snapshot with unchanged arguments,
//! every function returns equal results.

use serde::Serialize;
use shared_types::{CorpusRecord, RecordStatus};
use std::collections::BTreeMap;

/// Per-status record counts plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Records awaiting review.
    pub pending: usize,
    /// Accepted records.
    pub verified: usize,
    /// Declined records.
    pub rejected: usize,
    /// All records.
    pub total: usize,
}

/// Case-insensitive substring filter over language, region, and status.
/// An empty term is the identity.
pub fn filter<'a>(snapshot: &'a [CorpusRecord], term: &str) -> Vec<&'a CorpusRecord> {
    if term.is_empty() {
        return snapshot.iter().collect();
    }
    let needle = term.to_lowercase();
    snapshot
        .iter()
        .filter(|record| {
            record.language.to_lowercase().contains(&needle)
                || record.region.to_lowercase().contains(&needle)
                || record.status.as_str().contains(&needle)
        })
        .collect()
}

/// Fixed-size window over `items`. Page indexes are zero-based; an
/// out-of-range index yields an empty page, never an error.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    if page_size == 0 {
        return &items[..0];
    }
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &items[..0];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Count records per review status.
pub fn status_counts(snapshot: &[CorpusRecord]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: snapshot.len(),
        ..StatusCounts::default()
    };
    for record in snapshot {
        match record.status {
            RecordStatus::Pending => counts.pending += 1,
            RecordStatus::Verified => counts.verified += 1,
            RecordStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// Count records per language. `BTreeMap` for deterministic iteration when
/// rendering distributions.
pub fn language_counts(snapshot: &[CorpusRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in snapshot {
        *counts.entry(record.language.clone()).or_insert(0) += 1;
    }
    counts
}
