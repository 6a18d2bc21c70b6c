use std::collections::VecDeque;

use crate::board::{Board, BoardError};
use crate::engine::apply::successors;

use super::node::NodeArena;
use super::{BoardSet, SearchLimits, SearchReport, SearchStats, SolveResult};

/// Breadth-first search. Edges all cost one move and nodes leave the
/// frontier in non-decreasing depth order, so the first goal dequeued
/// carries a minimum-move solution.
pub fn solve_bfs(initial: &Board) -> Result<SolveResult, BoardError> {
    solve_bfs_with(initial, SearchLimits::unbounded(), || false).map(|r| r.result)
}

/// BFS with an expansion budget and a cancellation probe polled once
/// per expansion, for callers that need to stay responsive during
/// long searches.
pub fn solve_bfs_with<F>(
    initial: &Board,
    limits: SearchLimits,
    mut cancel: F,
) -> Result<SearchReport, BoardError>
where
    F: FnMut() -> bool,
{
    initial.validate()?;

    let (mut arena, root) = NodeArena::with_root(initial.clone(), 0);
    let mut stats = SearchStats::default();

    // Membership is decided at enqueue time; re-admitting a board
    // reached by a different path would blow the frontier up.
    let mut visited: BoardSet = BoardSet::default();
    visited.insert(initial.clone());

    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(root);

    while let Some(id) = frontier.pop_front() {
        if cancel() {
            return Ok(SearchReport {
                result: SolveResult::Cancelled,
                stats,
            });
        }
        if let Some(cap) = limits.max_expansions {
            if stats.expanded >= cap {
                return Ok(SearchReport {
                    result: SolveResult::Limited,
                    stats,
                });
            }
        }
        stats.expanded += 1;
        let depth = arena.get(id).g;
        stats.max_depth = stats.max_depth.max(depth);

        if arena.get(id).board.is_solved() {
            let moves = arena.path_moves(id);
            return Ok(SearchReport {
                result: SolveResult::Solved(moves),
                stats,
            });
        }

        for (mv, child) in successors(&arena.get(id).board) {
            if visited.insert(child.clone()) {
                let g = depth + 1;
                let node = arena.push(id, mv, child, g, g);
                frontier.push_back(node);
                stats.generated += 1;
            }
        }
    }

    Ok(SearchReport {
        result: SolveResult::NoSolution,
        stats,
    })
}
