//! Match receipt summarizing one ranking run.
//!
//! The receipt carries a SHA-256 ranking root over the returned matches, so
//! two rankings can be compared for exact equality (same candidates, same
//! order, bit-identical scores) without shipping the matches themselves.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::Match;

/// Summary of a `find_matches` run.
///
/// ## Ranking Root
///
/// For each match in rank order the hasher absorbs:
///
/// ```text
/// user_id bytes | 0x00 | compatibility_score.to_bits() (little-endian u64)
/// ```
///
/// ## Example
///
/// ```
/// use praxis_match::types::{Match, MatchReceipt};
///
/// let matches = vec![Match::new("u2", "Sam", 0.9, vec![])];
/// let receipt = MatchReceipt::from_matches(1, 3, &matches, 1703577600000);
///
/// assert_eq!(receipt.matches_returned, 1);
/// assert_eq!(receipt.ranking_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchReceipt {
    /// Caller-assigned sequence number
    pub batch_id: u64,

    /// Candidates passed to the engine
    pub candidates_scored: u64,

    /// Matches left after thresholding and truncation
    pub matches_returned: u64,

    /// SHA-256 over the ranked matches
    pub ranking_root: [u8; 32],

    /// Caller-supplied completion timestamp in milliseconds
    pub timestamp: u64,
}

impl MatchReceipt {
    pub fn new(
        batch_id: u64,
        candidates_scored: u64,
        matches_returned: u64,
        ranking_root: [u8; 32],
        timestamp: u64,
    ) -> Self {
        Self {
            batch_id,
            candidates_scored,
            matches_returned,
            ranking_root,
            timestamp,
        }
    }

    /// Build a receipt with the ranking root computed from `matches`.
    pub fn from_matches(
        batch_id: u64,
        candidates_scored: u64,
        matches: &[Match],
        timestamp: u64,
    ) -> Self {
        Self::new(
            batch_id,
            candidates_scored,
            matches.len() as u64,
            Self::compute_root(matches),
            timestamp,
        )
    }

    /// Hash a ranked match list into a 32-byte root
    pub fn compute_root(matches: &[Match]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for m in matches {
            hasher.update(m.user_id.as_bytes());
            hasher.update([0u8]);
            hasher.update(m.compatibility_score.to_bits().to_le_bytes());
        }
        hasher.finalize().into()
    }

    pub fn ranking_root_hex(&self) -> String {
        hex::encode(self.ranking_root)
    }

    /// No candidates were scored
    pub fn is_empty(&self) -> bool {
        self.candidates_scored == 0
    }

    /// Fraction of scored candidates that made the returned list.
    ///
    /// Returns None if no candidates were scored.
    pub fn hit_rate(&self) -> Option<f64> {
        if self.candidates_scored == 0 {
            None
        } else {
            Some(self.matches_returned as f64 / self.candidates_scored as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
