//! Claimed-range tracking for multi-pass matchers.
//!
//! Regex matchers run their passes in a fixed order. Once a pass claims a range, later passes
//! must not style anything overlapping it. [`ClaimSet`] answers "is this range already taken?"
//! without rescanning every earlier match.

use std::ops::Range;

/// A half-open `[start, end)` byte range recorded by an earlier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    /// Start offset (bytes)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Claim {
    /// Create a claim for `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if the claim contains a specific position.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if the claim overlaps `[start, end)`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// The claim as a `Range`.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Set of claimed ranges.
///
/// Uses a sorted vector with binary search plus a prefix-maximum of end offsets, so point and
/// range queries cost O(log n + k) and stay cheap when a document produces many claims.
#[derive(Debug, Clone, Default)]
pub struct ClaimSet {
    /// Claims, kept sorted by start offset.
    claims: Vec<Claim>,
    /// `prefix_max_end[i] = max(claims[0..=i].end)`
    prefix_max_end: Vec<usize>,
}

impl ClaimSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    fn rebuild_prefix_max_end_from(&mut self, start_idx: usize) {
        if self.claims.is_empty() {
            self.prefix_max_end.clear();
            return;
        }

        if self.prefix_max_end.len() != self.claims.len() {
            self.prefix_max_end.resize(self.claims.len(), 0);
        }

        let mut max_end = if start_idx == 0 {
            0
        } else {
            self.prefix_max_end[start_idx - 1]
        };

        for (idx, claim) in self.claims.iter().enumerate().skip(start_idx) {
            max_end = max_end.max(claim.end);
            self.prefix_max_end[idx] = max_end;
        }
    }

    /// Record a claim. Empty ranges are ignored.
    pub fn insert(&mut self, claim: Claim) {
        if claim.start >= claim.end {
            return;
        }

        let pos = self.claims.partition_point(|c| c.start <= claim.start);
        self.claims.insert(pos, claim);
        self.prefix_max_end.insert(pos, 0);
        self.rebuild_prefix_max_end_from(pos);
    }

    /// Returns `true` if any claim contains `pos`.
    pub fn contains(&self, pos: usize) -> bool {
        // Every claim at or after `idx` starts after `pos`.
        let idx = self.claims.partition_point(|c| c.start <= pos);
        for i in (0..idx).rev() {
            if self.prefix_max_end[i] <= pos {
                break;
            }
            if self.claims[i].contains(pos) {
                return true;
            }
        }
        false
    }

    /// Returns the claim containing `pos`, if any.
    pub fn claim_at(&self, pos: usize) -> Option<Claim> {
        let idx = self.claims.partition_point(|c| c.start <= pos);
        for i in (0..idx).rev() {
            if self.prefix_max_end[i] <= pos {
                break;
            }
            if self.claims[i].contains(pos) {
                return Some(self.claims[i]);
            }
        }
        None
    }

    /// Returns `true` if any claim overlaps `[start, end)`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        !self.query_range(start, end).is_empty()
    }

    /// Query all claims overlapping `[start, end)`.
    pub fn query_range(&self, start: usize, end: usize) -> Vec<Claim> {
        if self.claims.is_empty() || start >= end {
            return Vec::new();
        }

        // Claims at or after `search_end` start at or after `end`.
        let search_end = self.claims.partition_point(|c| c.start < end);
        if search_end == 0 {
            return Vec::new();
        }

        // Expand backward until `prefix_max_end` shows earlier claims cannot cross `start`.
        let mut scan_start = self.claims.partition_point(|c| c.start < start).min(search_end);
        while scan_start > 0 && self.prefix_max_end[scan_start - 1] > start {
            scan_start -= 1;
        }

        self.claims[scan_start..search_end]
            .iter()
            .filter(|c| c.overlaps(start, end))
            .copied()
            .collect()
    }

    /// Remove every claim that starts inside `[start, end)` and return them.
    pub fn remove_starting_within(&mut self, start: usize, end: usize) -> Vec<Claim> {
        let from = self.claims.partition_point(|c| c.start < start);
        let to = self.claims.partition_point(|c| c.start < end);
        if from >= to {
            return Vec::new();
        }

        let removed: Vec<Claim> = self.claims.drain(from..to).collect();
        self.prefix_max_end.truncate(self.claims.len());
        self.rebuild_prefix_max_end_from(from);
        removed
    }

    /// All claims, sorted by start offset.
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// Get number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Clear all claims
    pub fn clear(&mut self) {
        self.claims.clear();
        self.prefix_max_end.clear();
    }
}
