use serde::{Deserialize, Serialize};
use std::fmt;

/// A move names the side the sliding tile arrives from, relative to the
/// blank cell: `Up` slides the tile below the blank upward into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Fixed successor-expansion order. Changing it changes which
    /// equal-cost solution the solvers return first.
    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Left, Dir::Right, Dir::Up, Dir::Down]
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Offset (dr, dc), relative to the blank, of the cell whose tile
    /// slides into the blank for this move.
    #[inline]
    pub fn source_offset(self) -> (i8, i8) {
        match self {
            Dir::Up => (1, 0),
            Dir::Down => (-1, 0),
            Dir::Left => (0, 1),
            Dir::Right => (0, -1),
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dir::Up => "up",
            Dir::Down => "down",
            Dir::Left => "left",
            Dir::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// Board indexing helpers (row-major, runtime dimensions)
#[inline]
pub fn idx_to_rc(idx: usize, width: u8) -> (u8, u8) {
    debug_assert!(width > 0);
    ((idx / usize::from(width)) as u8, (idx % usize::from(width)) as u8)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8, width: u8, height: u8) -> Option<usize> {
    if r < height && c < width {
        Some(usize::from(r) * usize::from(width) + usize::from(c))
    } else {
        None
    }
}
