//! Abort checks consulted at the top of every recursive search call
//!
//! A budget only decides whether to stop. It never influences which
//! candidate is tried next, so a search that is not aborted finds the same
//! solution under any budget.

use std::time::{Duration, Instant};

/// Counters accumulated during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls entered
    pub nodes: u64,
    /// Tiles committed to the grid
    pub placements: u64,
    /// Committed tiles removed again
    pub rollbacks: u64,
    /// Full constraint-set evaluations
    pub constraint_checks: u64,
}

/// Decides whether a running search should stop early
pub trait SearchBudget {
    /// Called once per recursive call before any work is done
    fn should_abort(&mut self, stats: &SearchStats) -> bool;
}

/// Budget that never aborts
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl SearchBudget for Unlimited {
    fn should_abort(&mut self, _stats: &SearchStats) -> bool {
        false
    }
}

/// Abort once more than a fixed number of nodes have been visited
#[derive(Debug, Clone, Copy)]
pub struct NodeLimit {
    max_nodes: u64,
}

impl NodeLimit {
    /// Allow at most `max_nodes` recursive calls
    pub const fn new(max_nodes: u64) -> Self {
        Self { max_nodes }
    }
}

impl SearchBudget for NodeLimit {
    fn should_abort(&mut self, stats: &SearchStats) -> bool {
        stats.nodes > self.max_nodes
    }
}

/// Abort once a wall-clock instant has passed
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Stop at a fixed instant
    pub const fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Stop after `limit` has elapsed from now
    pub fn after(limit: Duration) -> Self {
        let now = Instant::now();
        Self::at(now.checked_add(limit).unwrap_or(now))
    }
}

impl SearchBudget for Deadline {
    fn should_abort(&mut self, _stats: &SearchStats) -> bool {
        Instant::now() >= self.at
    }
}

impl<F> SearchBudget for F
where
    F: FnMut(&SearchStats) -> bool,
{
    fn should_abort(&mut self, stats: &SearchStats) -> bool {
        self(stats)
    }
}

// An absent budget never aborts
impl<B: SearchBudget> SearchBudget for Option<B> {
    fn should_abort(&mut self, stats: &SearchStats) -> bool {
        self.as_mut().is_some_and(|budget| budget.should_abort(stats))
    }
}

// Both budgets are always consulted so observers see every node
impl<A: SearchBudget, B: SearchBudget> SearchBudget for (A, B) {
    fn should_abort(&mut self, stats: &SearchStats) -> bool {
        let first = self.0.should_abort(stats);
        let second = self.1.should_abort(stats);
        first || second
    }
}
