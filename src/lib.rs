#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod board;
pub mod puzzle;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod heuristic;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, BoardError, Tile};
pub use crate::engine::apply::{apply_move, successors, IllegalMove};
pub use crate::engine::heuristic::manhattan;
pub use crate::puzzle::{load_board_from_json, parse_board};
pub use crate::rng::rng_for_seed;
pub use crate::solver::{
    solve_astar, solve_astar_with, solve_bfs, solve_bfs_with, SearchLimits, SearchReport,
    SearchStats, SolveResult,
};
pub use crate::types::Dir;
