//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for the maximum-exclusive-sets search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum search nodes to visit (0 = unlimited).
    /// The search fails with `SearchBudgetExceeded` instead of running on.
    pub max_nodes: u64,

    /// Skip subtrees whose best possible packing cannot beat the incumbent.
    /// Does not change the returned packing, only the work done.
    pub prune: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: 0,
            prune: true,
        }
    }
}

impl SolverConfig {
    /// Set the node budget.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Enable or disable upper-bound pruning.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }
}
