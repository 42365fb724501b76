//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one maximum-exclusive-sets search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Valid sets on the board, i.e. include/skip decisions per path.
    pub candidates: usize,

    /// Search nodes visited, leaves included.
    pub nodes_visited: u64,

    /// Subtrees cut by the upper bound.
    pub nodes_pruned: u64,

    /// Times a strictly larger packing replaced the incumbent.
    pub improvements: u32,

    /// Triads in the best packing found.
    pub best_size: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SolveStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.best_size, 0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SolveStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes_visited = 500;
        stats.time_us = 250_000;
        assert_eq!(stats.nodes_per_second(), 2000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SolveStats::new();
        stats.nodes_visited = 100;
        stats.improvements = 3;

        stats.reset();

        assert_eq!(stats, SolveStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SolveStats::new();
        stats.candidates = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SolveStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
