//! Maximum exclusive sets: the largest collection of pairwise card-disjoint
//! valid sets on a board.
//!
//! This is set packing, so the search is exact and exponential in the worst
//! case. The candidate list is `all_sets(cards)`. Every candidate is either
//! skipped or, when none of its cards are taken yet, included, giving a
//! binary include/skip tree of depth `candidates.len()`.
//!
//! ## Which maximum is returned
//!
//! Among packings of maximum size, the one returned is the one reached by
//! preferring "skip" at the earliest decision where two maxima differ. The
//! depth-first walk visits the skip branch first and replaces the incumbent
//! only with a strictly larger packing, which yields exactly that packing.
//! Pruning only cuts subtrees that cannot hold a strictly larger packing, so
//! it never changes the answer.
//!
//! ## Usage
//!
//! ```
//! use set_solver::cards::Card;
//! use set_solver::solver::{MaxExclusiveSearch, SolverConfig};
//!
//! let board: Vec<Card> = ["0000", "1111", "2222", "0120", "0021", "0222"]
//!     .iter()
//!     .map(|id| id.parse().unwrap())
//!     .collect();
//!
//! let mut search = MaxExclusiveSearch::new(SolverConfig::default().with_max_nodes(10_000));
//! let packing = search.run(&board).unwrap();
//! assert_eq!(packing.len(), 2);
//! assert!(search.stats().nodes_visited > 0);
//! ```

use std::time::Instant;

use smallvec::SmallVec;

use crate::cards::{Card, CardMask};
use crate::core::{Result, SetError, MAX_ROWS};

use super::config::SolverConfig;
use super::stats::SolveStats;
use super::triads::{all_sets, Triad};

/// Candidate indices of a packing. A board holds at most 27 disjoint sets.
type Chosen = SmallVec<[usize; MAX_ROWS]>;

/// Configured maximum-exclusive-sets search.
///
/// Holds the configuration and the statistics of the last run. Runs are
/// independent; nothing is cached between them.
#[derive(Clone, Debug, Default)]
pub struct MaxExclusiveSearch {
    config: SolverConfig,
    stats: SolveStats,
}

impl MaxExclusiveSearch {
    /// Create a search with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            stats: SolveStats::default(),
        }
    }

    /// Find a maximum packing of disjoint valid sets on the board.
    ///
    /// The caller passes a snapshot; the board is only read.
    ///
    /// # Errors
    ///
    /// `SetError::SearchBudgetExceeded` if `max_nodes` is non-zero and the
    /// search needs more nodes than that. No partial answer is returned.
    pub fn run(&mut self, cards: &[Card]) -> Result<Vec<Triad>> {
        let start = Instant::now();
        self.stats.reset();

        let candidates = all_sets(cards);
        let masks: Vec<CardMask> = candidates
            .iter()
            .map(|triad| CardMask::new().with(triad))
            .collect();
        self.stats.candidates = candidates.len();

        let mut walk = Walk {
            masks: &masks,
            board: cards.iter().copied().collect(),
            config: &self.config,
            stats: &mut self.stats,
            chosen: Chosen::new(),
            best: Chosen::new(),
        };
        let outcome = walk.explore(0, CardMask::EMPTY);
        let best = std::mem::take(&mut walk.best);

        self.stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        outcome?;

        self.stats.best_size = best.len();
        Ok(best.into_iter().map(|index| candidates[index]).collect())
    }

    /// Get statistics of the last run.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

/// State of one depth-first walk over the include/skip tree.
struct Walk<'a> {
    masks: &'a [CardMask],
    board: CardMask,
    config: &'a SolverConfig,
    stats: &'a mut SolveStats,
    chosen: Chosen,
    best: Chosen,
}

impl Walk<'_> {
    fn explore(&mut self, index: usize, used: CardMask) -> Result<()> {
        self.stats.nodes_visited += 1;
        if self.config.max_nodes > 0 && self.stats.nodes_visited > self.config.max_nodes {
            return Err(SetError::SearchBudgetExceeded {
                nodes: self.config.max_nodes,
            });
        }

        if index == self.masks.len() {
            if self.chosen.len() > self.best.len() {
                self.best = self.chosen.clone();
                self.stats.improvements += 1;
            }
            return Ok(());
        }

        if self.config.prune && self.upper_bound(index, used) <= self.best.len() {
            self.stats.nodes_pruned += 1;
            return Ok(());
        }

        self.explore(index + 1, used)?;

        let mask = self.masks[index];
        if !used.intersects(mask) {
            self.chosen.push(index);
            let outcome = self.explore(index + 1, used.union(mask));
            self.chosen.pop();
            outcome?;
        }

        Ok(())
    }

    /// Largest packing size reachable below this node.
    fn upper_bound(&self, index: usize, used: CardMask) -> usize {
        let remaining = self.masks.len() - index;
        let free = self.board.difference(used).len() / 3;
        self.chosen.len() + remaining.min(free)
    }
}

/// Maximum packing of disjoint valid sets, without a node budget.
///
/// Total over any board, including the empty one.
#[must_use]
pub fn max_exclusive_sets(cards: &[Card]) -> Vec<Triad> {
    let unlimited = SolverConfig::default().with_max_nodes(0);
    match MaxExclusiveSearch::new(unlimited).run(cards) {
        Ok(packing) => packing,
        // only the node budget can fail a run, and it is disabled here
        Err(_) => Vec::new(),
    }
}
