//! Neighbour connectivity modes for the square lattice.

use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_MOORE: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The 4 von Neumann offsets: N, S, W, E.
const OFFSETS_VON_NEUMANN: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Which cells count as neighbours of a lattice site.
///
/// Moore connectivity joins the four cardinal directions with the four
/// diagonals (up to 8 neighbours); von Neumann keeps only the cardinals
/// (up to 4). With open boundaries, corner and edge sites see fewer
/// in-bounds neighbours in either mode.
///
/// Parseable from the configuration strings `"moore"` and
/// `"von-neumann"`:
///
/// ```
/// use temblor_grid::Neighborhood;
///
/// let mode: Neighborhood = "von-neumann".parse().unwrap();
/// assert_eq!(mode, Neighborhood::VonNeumann);
/// assert_eq!(mode.max_degree(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// 8-connected: cardinal + diagonal neighbours.
    Moore,
    /// 4-connected: cardinal neighbours only.
    VonNeumann,
}

impl Neighborhood {
    /// Row/column offset table for this mode.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Moore => &OFFSETS_MOORE,
            Self::VonNeumann => &OFFSETS_VON_NEUMANN,
        }
    }

    /// Neighbour count of a fully interior site.
    pub fn max_degree(self) -> usize {
        self.offsets().len()
    }
}

impl FromStr for Neighborhood {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moore" => Ok(Self::Moore),
            "von-neumann" => Ok(Self::VonNeumann),
            other => Err(GridError::UnknownNeighborhood {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moore => write!(f, "moore"),
            Self::VonNeumann => write!(f, "von-neumann"),
        }
    }
}
