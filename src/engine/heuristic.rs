use crate::board::Board;
use crate::types::idx_to_rc;

/// Sum of Manhattan distances from every tile to its goal cell (the
/// blank contributes nothing). Admissible: each unit of displacement
/// costs at least one move. Consistent: a single move changes the sum
/// by exactly one, so it never decreases faster than the path cost
/// grows. Zero iff the board is solved.
///
/// O(W·H) per call; this dominates per-expansion cost in A*.
#[inline]
pub fn manhattan(board: &Board) -> u32 {
    let width = board.width();
    let mut distance: u32 = 0;
    for (idx, cell) in board.cells().iter().enumerate() {
        if let Some(tile) = *cell {
            let (r, c) = idx_to_rc(idx, width);
            let (gr, gc) = board.goal_pos(tile);
            distance += u32::from(r.abs_diff(gr)) + u32::from(c.abs_diff(gc));
        }
    }
    distance
}
