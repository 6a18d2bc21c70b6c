use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::{Board, BoardError};
use crate::engine::apply::successors;
use crate::engine::heuristic::manhattan;

use super::node::NodeArena;
use super::{BoardMap, BoardSet, SearchLimits, SearchReport, SearchStats, SolveResult};

/// A* with the Manhattan-distance estimate. The heuristic is
/// admissible and consistent, so the first expansion of the goal board
/// carries a minimum-move solution — the same length BFS would find,
/// usually after far fewer expansions.
pub fn solve_astar(initial: &Board) -> Result<SolveResult, BoardError> {
    solve_astar_with(initial, SearchLimits::unbounded(), || false).map(|r| r.result)
}

/// A* with an expansion budget and a cancellation probe polled once
/// per expansion.
///
/// Open-set discipline: a best-known `(g, node)` map paired with a
/// lazy-deletion heap keyed by `(f, insertion seq)`. A cheaper path to
/// an open board replaces the map entry and pushes a fresh heap entry;
/// the superseded one is discarded when popped. A board therefore
/// never coexists with a worse duplicate of itself, and `f`-ties
/// resolve to the earliest insertion, keeping equal-cost solution
/// selection deterministic.
pub fn solve_astar_with<F>(
    initial: &Board,
    limits: SearchLimits,
    mut cancel: F,
) -> Result<SearchReport, BoardError>
where
    F: FnMut() -> bool,
{
    initial.validate()?;

    let root_f = manhattan(initial);
    let (mut arena, root) = NodeArena::with_root(initial.clone(), root_f);
    let mut stats = SearchStats::default();

    let mut open_best: BoardMap<(u32, usize)> = BoardMap::default();
    open_best.insert(initial.clone(), (0, root));

    let mut closed: BoardSet = BoardSet::default();

    let mut heap: BinaryHeap<Reverse<(u32, u64, usize)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((root_f, seq, root)));

    while let Some(Reverse((_, _, id))) = heap.pop() {
        // Lazy deletion: drop entries superseded by a cheaper path or
        // expanded already.
        {
            let board = &arena.get(id).board;
            if closed.contains(board) {
                continue;
            }
            match open_best.get(board) {
                Some(&(_, best_id)) if best_id == id => {}
                _ => continue,
            }
        }

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
        let g = arena.get(id).g;
        stats.max_depth = stats.max_depth.max(g);

        if arena.get(id).board.is_solved() {
            let moves = arena.path_moves(id);
            return Ok(SearchReport {
                result: SolveResult::Solved(moves),
                stats,
            });
        }

        let board = arena.get(id).board.clone();
        open_best.remove(&board);
        closed.insert(board.clone());

        for (mv, child) in successors(&board) {
            if closed.contains(&child) {
                continue;
            }
            let child_g = g + 1;
            let child_f = child_g + manhattan(&child);
            // Keep only the best-known cost per open board.
            match open_best.get(&child) {
                Some(&(best_g, _)) if best_g <= child_g => continue,
                _ => {}
            }
            let node = arena.push(id, mv, child.clone(), child_g, child_f);
            open_best.insert(child, (child_g, node));
            seq += 1;
            heap.push(Reverse((arena.get(node).f, seq, node)));
            stats.generated += 1;
        }
    }

    Ok(SearchReport {
        result: SolveResult::NoSolution,
        stats,
    })
}
