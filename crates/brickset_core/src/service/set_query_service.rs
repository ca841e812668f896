//! Aggregate queries over the LEGO set catalogue.
//!
//! # Responsibility
//! - Provide the five read-only catalogue queries.
//! - Delegate record access to a `LegoSetRepository`.
//!
//! # Invariants
//! - Every query is pure: same records and arguments, same result.
//! - Sets without tags are skipped by tag queries; sets without a theme are
//!   skipped by theme grouping. Neither is an error.
//! - Piece partitions always contain both `true` and `false` keys.

use crate::model::lego_set::LegoSet;
use crate::repo::lego_set_repo::LegoSetRepository;
use log::debug;
use std::collections::BTreeMap;

/// Threshold used when a piece partition is requested without one.
pub const DEFAULT_PIECE_THRESHOLD: u32 = 1000;

/// Read-only query service over a fixed record collection.
pub struct SetQueryService<R: LegoSetRepository> {
    repo: R,
}

impl<R: LegoSetRepository> SetQueryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn record_count(&self) -> usize {
        self.sets().len()
    }

    /// Returns whether any set carries exactly `tag` (case-sensitive).
    pub fn has_tag_anywhere(&self, tag: &str) -> bool {
        let found = self.sets().iter().any(|set| set.has_tag(tag));
        debug!(
            "event=has_tag_anywhere module=query status=ok tag_len={} found={}",
            tag.len(),
            found
        );
        found
    }

    /// Counts tag occurrences starting with `prefix`, across all sets.
    ///
    /// # Contract
    /// - Whole-string prefix match, case-sensitive.
    /// - Repeated tags on one set are counted once per occurrence.
    /// - An empty `prefix` counts every tag occurrence.
    pub fn count_tags_with_prefix(&self, prefix: &str) -> u64 {
        let count = self
            .sets()
            .iter()
            .flat_map(LegoSet::tags_iter)
            .filter(|tag| tag.starts_with(prefix))
            .count() as u64;
        debug!(
            "event=count_tags_with_prefix module=query status=ok prefix_len={} count={}",
            prefix.len(),
            count
        );
        count
    }

    /// Returns the largest piece count, or `0` for an empty catalogue.
    pub fn max_pieces(&self) -> u32 {
        let max = self
            .sets()
            .iter()
            .map(|set| set.pieces)
            .fold(0, u32::max);
        debug!("event=max_pieces module=query status=ok max={max}");
        max
    }

    /// Splits sets into `pieces > threshold` (`true`) and the rest (`false`).
    ///
    /// Both keys are always present; their counts sum to `record_count()`.
    pub fn partition_by_piece_threshold(&self, threshold: u32) -> BTreeMap<bool, u64> {
        let mut buckets = BTreeMap::from([(false, 0_u64), (true, 0_u64)]);
        for set in self.sets() {
            *buckets.entry(set.pieces > threshold).or_insert(0) += 1;
        }
        debug!(
            "event=partition_by_piece_threshold module=query status=ok threshold={} above={} at_or_below={}",
            threshold, buckets[&true], buckets[&false]
        );
        buckets
    }

    /// `partition_by_piece_threshold(DEFAULT_PIECE_THRESHOLD)`.
    pub fn partition_by_default_threshold(&self) -> BTreeMap<bool, u64> {
        self.partition_by_piece_threshold(DEFAULT_PIECE_THRESHOLD)
    }

    /// Counts sets per theme. Sets without a theme are left out entirely.
    pub fn count_by_theme(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::<String, u64>::new();
        for theme in self.sets().iter().filter_map(|set| set.theme.as_deref()) {
            match counts.get_mut(theme) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(theme.to_string(), 1);
                }
            }
        }
        debug!(
            "event=count_by_theme module=query status=ok themes={}",
            counts.len()
        );
        counts
    }

    fn sets(&self) -> &[LegoSet] {
        self.repo.get_all()
    }
}
