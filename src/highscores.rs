//! High score leaderboard
//!
//! In-memory, session-lifetime only: the core performs no I/O, so the
//! table lives exactly as long as the embedding that owns it. Tracks the
//! top 10 finished runs.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Obstacle pairs cleared
    pub score: u32,
    /// Physics ticks survived
    pub ticks: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u32, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, ticks };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_add_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(3, 600), Some(1));
        assert_eq!(scores.add_score(7, 1400), Some(1));
        assert_eq!(scores.add_score(5, 1000), Some(2));

        let ranked: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ranked, vec![7, 5, 3]);
        assert_eq!(scores.top_score(), Some(7));
    }

    #[test]
    fn test_table_truncates_at_capacity() {
        let mut scores = HighScores::new();
        for s in 1..=12u32 {
            scores.add_score(s, s as u64 * 100);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest survivors are 3..=12
        assert_eq!(scores.entries.last().map(|e| e.score), Some(3));

        // A score below the cutoff no longer qualifies
        assert!(!scores.qualifies(2));
        assert_eq!(scores.add_score(2, 200), None);
    }

    #[test]
    fn test_potential_rank_matches_insertion() {
        let mut scores = HighScores::new();
        scores.add_score(10, 2000);
        scores.add_score(6, 1200);

        assert_eq!(scores.potential_rank(8), Some(2));
        assert_eq!(scores.add_score(8, 1600), Some(2));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_ties_rank_below_existing() {
        let mut scores = HighScores::new();
        scores.add_score(5, 1000);
        // An equal score is not strictly greater, so it slots in after
        assert_eq!(scores.add_score(5, 900), Some(2));
    }
}
