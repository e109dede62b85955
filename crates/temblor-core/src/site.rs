//! The lattice coordinate type.

use std::fmt;

/// A cell coordinate on a square lattice.
///
/// Rows and columns are `i32` so that neighbour offsets can go one step
/// out of bounds without wrapping; valid sites satisfy
/// `0 <= row, col < side`. Field buffers are flat row-major vectors,
/// addressed via [`Site::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Site {
    /// Create a site from row and column indices.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row-major flat index into a `side * side` field buffer.
    ///
    /// The caller must ensure the site is in bounds for `side`.
    pub fn index(self, side: u32) -> usize {
        self.row as usize * side as usize + self.col as usize
    }
}

impl From<(i32, i32)> for Site {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
