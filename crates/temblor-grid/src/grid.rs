//! The square lattice: bounds, indexing, and neighbour enumeration.

use crate::error::GridError;
use crate::neighborhood::Neighborhood;
use smallvec::SmallVec;
use temblor_core::Site;

/// A finite square lattice of `side * side` cells with open boundaries.
///
/// Each cell has coordinate `(row, col)` where `0 <= row, col < side`.
/// Neighbour offsets that land outside the lattice are dropped — there
/// is no wraparound — so corner and edge cells have fewer valid
/// neighbours than interior cells.
///
/// # Examples
///
/// ```
/// use temblor_grid::{Neighborhood, SquareGrid};
/// use temblor_core::Site;
///
/// let grid = SquareGrid::new(16, Neighborhood::Moore).unwrap();
/// assert_eq!(grid.cell_count(), 256);
///
/// // A corner cell keeps only its 3 in-bounds Moore neighbours.
/// assert_eq!(grid.neighbours(Site::new(0, 0)).len(), 3);
/// assert_eq!(grid.neighbours(Site::new(8, 8)).len(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    side: u32,
    neighborhood: Neighborhood,
}

impl SquareGrid {
    /// Maximum side length: coordinates use `i32`, so the side must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a lattice with `side * side` cells and the given
    /// connectivity.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `side` is 0, or
    /// `Err(GridError::DimensionTooLarge)` if it exceeds `i32::MAX`.
    pub fn new(side: u32, neighborhood: Neighborhood) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::EmptyGrid);
        }
        if side > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                value: side,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { side, neighborhood })
    }

    /// Side length.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Neighbour connectivity mode.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// `true` if the site lies within the lattice bounds.
    pub fn contains(&self, site: Site) -> bool {
        let n = self.side as i32;
        site.row >= 0 && site.row < n && site.col >= 0 && site.col < n
    }

    /// Row-major flat index of an in-bounds site.
    pub fn index(&self, site: Site) -> usize {
        debug_assert!(self.contains(site), "site {site} out of bounds");
        site.index(self.side)
    }

    /// Enumerate the in-bounds neighbours of `site`, in offset-table
    /// order (cardinals first, then diagonals for Moore).
    ///
    /// The `SmallVec<[Site; 8]>` avoids heap allocation for both
    /// connectivity modes.
    pub fn neighbours(&self, site: Site) -> SmallVec<[Site; 8]> {
        let mut result = SmallVec::new();
        for &(dr, dc) in self.neighborhood.offsets() {
            let nb = Site::new(site.row + dr, site.col + dc);
            if self.contains(nb) {
                result.push(nb);
            }
        }
        result
    }

    /// Number of in-bounds neighbours of `site`.
    pub fn neighbour_count(&self, site: Site) -> usize {
        self.neighborhood
            .offsets()
            .iter()
            .filter(|&&(dr, dc)| self.contains(Site::new(site.row + dr, site.col + dc)))
            .count()
    }

    /// All sites in canonical row-major order:
    /// `(0,0), (0,1), ..., (side-1, side-1)`.
    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        let n = self.side as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Site::new(row, col)))
    }
}
