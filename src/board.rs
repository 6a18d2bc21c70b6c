use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{idx_to_rc, rc_to_idx, Dir};

/// Tile identifier; a valid W×H board holds each of 1..=W·H−1 exactly once.
pub type Tile = u16;

/// Rejection reasons for externally supplied grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    BadDimensions { width: usize, height: usize },
    WrongCellCount { expected: usize, got: usize },
    TileOutOfRange { tile: Tile, max: Tile },
    DuplicateTile { tile: Tile },
    BlankCount { count: usize },
    RaggedRows,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::BadDimensions { width, height } => {
                write!(f, "Board dimensions {width}x{height} unsupported (need 1..=255 each)")
            }
            BoardError::WrongCellCount { expected, got } => {
                write!(f, "Expected {expected} cells, got {got}")
            }
            BoardError::TileOutOfRange { tile, max } => {
                write!(f, "Tile {tile} out of range (valid tiles are 1..={max})")
            }
            BoardError::DuplicateTile { tile } => write!(f, "Tile {tile} appears more than once"),
            BoardError::BlankCount { count } => {
                write!(f, "Expected exactly one blank cell, found {count}")
            }
            BoardError::RaggedRows => write!(f, "Rows have differing widths"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Raw serde surface; conversion validates, so deserialized boards
/// always satisfy the tile-uniqueness/single-blank invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardSpec {
    width: u8,
    height: u8,
    cells: Vec<Option<Tile>>,
}

/// Grid of numbered tiles plus one blank cell, stored row-major.
/// Compared by full value; never mutated once handed to a solver —
/// move application clones, so sibling expansions never alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardSpec", into = "BoardSpec")]
pub struct Board {
    width: u8,
    height: u8,
    // Cell index of the blank, kept in sync by every constructor and
    // by move application.
    blank: u16,
    cells: Vec<Option<Tile>>,
}

impl TryFrom<BoardSpec> for Board {
    type Error = BoardError;

    fn try_from(spec: BoardSpec) -> Result<Self, Self::Error> {
        Board::from_cells(spec.width, spec.height, spec.cells)
    }
}

impl From<Board> for BoardSpec {
    fn from(b: Board) -> Self {
        BoardSpec {
            width: b.width,
            height: b.height,
            cells: b.cells,
        }
    }
}

/// Invariant check over a candidate cell vector. Returns the blank's
/// cell index on success.
fn check_cells(width: u8, height: u8, cells: &[Option<Tile>]) -> Result<usize, BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::BadDimensions {
            width: usize::from(width),
            height: usize::from(height),
        });
    }
    let len = usize::from(width) * usize::from(height);
    if cells.len() != len {
        return Err(BoardError::WrongCellCount {
            expected: len,
            got: cells.len(),
        });
    }
    let blanks = cells.iter().filter(|c| c.is_none()).count();
    if blanks != 1 {
        return Err(BoardError::BlankCount { count: blanks });
    }
    let mut seen = vec![false; len];
    let mut blank = 0usize;
    for (idx, cell) in cells.iter().enumerate() {
        match *cell {
            None => blank = idx,
            Some(tile) => {
                if tile == 0 || usize::from(tile) >= len {
                    return Err(BoardError::TileOutOfRange {
                        tile,
                        max: (len - 1) as Tile,
                    });
                }
                if seen[usize::from(tile)] {
                    return Err(BoardError::DuplicateTile { tile });
                }
                seen[usize::from(tile)] = true;
            }
        }
    }
    Ok(blank)
}

impl Board {
    /// Canonical solved board: tile `k` at row `(k−1)/W`, column
    /// `(k−1)%W`, blank in the last cell, so the grid reads 1, 2, …
    /// row by row.
    ///
    /// Panics if either dimension is zero.
    pub fn solved(width: u8, height: u8) -> Board {
        assert!(width >= 1 && height >= 1, "board dimensions must be at least 1x1");
        let len = usize::from(width) * usize::from(height);
        let mut cells: Vec<Option<Tile>> = Vec::with_capacity(len);
        for v in 1..len {
            cells.push(Some(v as Tile));
        }
        cells.push(None);
        Board {
            width,
            height,
            blank: (len - 1) as u16,
            cells,
        }
    }

    /// Validated construction from a row-major cell vector (`None` is
    /// the blank).
    pub fn from_cells(
        width: u8,
        height: u8,
        cells: Vec<Option<Tile>>,
    ) -> Result<Board, BoardError> {
        let blank = check_cells(width, height, &cells)?;
        Ok(Board {
            width,
            height,
            blank: blank as u16,
            cells,
        })
    }

    /// Validated construction from nested rows.
    pub fn from_rows(rows: &[Vec<Option<Tile>>]) -> Result<Board, BoardError> {
        if rows.is_empty() || rows[0].is_empty() || rows.len() > 255 || rows[0].len() > 255 {
            return Err(BoardError::BadDimensions {
                width: rows.first().map_or(0, Vec::len),
                height: rows.len(),
            });
        }
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(BoardError::RaggedRows);
        }
        let cells: Vec<Option<Tile>> = rows.iter().flatten().copied().collect();
        Board::from_cells(width as u8, rows.len() as u8, cells)
    }

    /// Re-check the construction invariant; the solver boundary rejects
    /// invalid boards before searching.
    pub fn validate(&self) -> Result<(), BoardError> {
        let blank = check_cells(self.width, self.height, &self.cells)?;
        debug_assert_eq!(blank as u16, self.blank, "blank cache out of sync");
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major cell slice (`None` is the blank).
    #[inline]
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Tile at (row, col); `None` for the blank or out-of-bounds
    /// coordinates.
    #[inline]
    pub fn get(&self, r: u8, c: u8) -> Option<Tile> {
        rc_to_idx(r, c, self.width, self.height).and_then(|i| self.cells[i])
    }

    /// Location of the blank cell as (row, col). O(1) via the cached
    /// index; a stale cache is a construction bug, not a recoverable
    /// state.
    #[inline]
    pub fn blank_pos(&self) -> (u8, u8) {
        debug_assert!(
            self.cells[usize::from(self.blank)].is_none(),
            "blank cache out of sync"
        );
        idx_to_rc(usize::from(self.blank), self.width)
    }

    /// Cell index of the tile that would slide for `mv`, if the move is
    /// legal from the current blank position.
    #[inline]
    pub(crate) fn move_source(&self, mv: Dir) -> Option<usize> {
        let (r, c) = self.blank_pos();
        let (dr, dc) = mv.source_offset();
        let sr = i16::from(r) + i16::from(dr);
        let sc = i16::from(c) + i16::from(dc);
        if sr < 0 || sc < 0 {
            return None;
        }
        rc_to_idx(sr as u8, sc as u8, self.width, self.height)
    }

    /// Boundary policy: `Up` needs a row below the blank, `Down` a row
    /// above, `Left` a column to the right, `Right` a column to the
    /// left.
    #[inline]
    pub fn is_legal(&self, mv: Dir) -> bool {
        self.move_source(mv).is_some()
    }

    /// Legal moves from this position, in fixed `Dir::all()` order.
    pub fn legal_moves(&self) -> Vec<Dir> {
        Dir::all().into_iter().filter(|&m| self.is_legal(m)).collect()
    }

    /// Goal test against the canonical placement rule, without
    /// allocating the goal board.
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells.iter().enumerate().all(|(idx, cell)| {
            let want = if idx == last { None } else { Some((idx + 1) as Tile) };
            *cell == want
        })
    }

    /// Goal position of a tile under the canonical placement rule.
    #[inline]
    pub fn goal_pos(&self, tile: Tile) -> (u8, u8) {
        debug_assert!(tile >= 1 && usize::from(tile) < self.cells.len());
        idx_to_rc(usize::from(tile) - 1, self.width)
    }

    /// Swap the blank with the given cell, updating the cache. Callers
    /// guarantee `idx` is the blank's in-bounds neighbor.
    #[inline]
    pub(crate) fn swap_blank_with(&mut self, idx: usize) {
        self.cells.swap(usize::from(self.blank), idx);
        self.blank = idx as u16;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = self.cells.len().saturating_sub(1).to_string().len().max(2);
        for r in 0..self.height {
            for c in 0..self.width {
                if c > 0 {
                    write!(f, " ")?;
                }
                match self.get(r, c) {
                    Some(t) => write!(f, "{t:>pad$}")?,
                    None => write!(f, "{:>pad$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
