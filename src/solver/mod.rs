use std::hash::BuildHasherDefault;

use serde::Serialize;

use crate::board::Board;
use crate::types::Dir;

pub mod astar;
pub mod bfs;
mod node;

pub use astar::{solve_astar, solve_astar_with};
pub use bfs::{solve_bfs, solve_bfs_with};

/// Hasher for duplicate-state detection: membership is by board value,
/// so equal boards reached by different paths collapse to one entry.
pub(crate) type FastHasher = BuildHasherDefault<ahash::AHasher>;
pub(crate) type BoardSet = hashbrown::HashSet<Board, FastHasher>;
pub(crate) type BoardMap<V> = hashbrown::HashMap<Board, V, FastHasher>;

/// Caller-imposed bounds on a single solver invocation. Frontier and
/// visited/closed structures are owned by the invocation; repeated or
/// interleaved calls never interfere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Stop with `Limited` after this many node expansions; `None`
    /// runs to exhaustion.
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    #[inline]
    pub const fn unbounded() -> Self {
        Self { max_expansions: None }
    }

    #[inline]
    pub const fn expansions(max: u64) -> Self {
        Self { max_expansions: Some(max) }
    }
}

/// Outcome of a solver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// Moves that replay from the initial board to the goal. Empty
    /// when the input was already solved.
    Solved(Vec<Dir>),
    /// The reachable state space was exhausted without finding the
    /// goal.
    NoSolution,
    /// The expansion budget ran out before the search could finish.
    /// Distinct from `NoSolution`: nothing was proven.
    Limited,
    /// The cancellation probe requested an early stop.
    Cancelled,
}

impl SolveResult {
    /// Solution length, if solved.
    #[inline]
    pub fn solution_len(&self) -> Option<usize> {
        match self {
            SolveResult::Solved(moves) => Some(moves.len()),
            _ => None,
        }
    }
}

/// Per-invocation search counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expanded: u64,
    /// Nodes created and enqueued (root excluded).
    pub generated: u64,
    /// Deepest expanded node, in moves from the root.
    pub max_depth: u32,
}

/// Result plus counters, returned by the `_with` entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub result: SolveResult,
    pub stats: SearchStats,
}
