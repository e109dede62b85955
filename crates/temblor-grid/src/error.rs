//! Error types for lattice construction and queries.

use std::fmt;

/// Errors arising from grid construction or neighbourhood parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The side length exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// The offending side length.
        value: u32,
        /// Largest supported side length.
        max: u32,
    },
    /// A neighbourhood mode string was not recognised.
    UnknownNeighborhood {
        /// The unparseable input.
        input: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "side length {value} exceeds maximum of {max}")
            }
            Self::UnknownNeighborhood { input } => {
                write!(
                    f,
                    "unknown neighbourhood '{input}' (expected 'moore' or 'von-neumann')"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
