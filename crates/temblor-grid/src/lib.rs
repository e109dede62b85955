//! Square-lattice topology for Temblor simulations.
//!
//! Defines the [`SquareGrid`] backend — a finite square lattice with
//! open (free) boundaries — and the [`Neighborhood`] connectivity
//! modes. Out-of-bounds neighbour offsets are dropped rather than
//! wrapped or clamped, so corner and edge cells have fewer neighbours
//! than interior cells; the redistribution rule depends on this.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod neighborhood;

pub use error::GridError;
pub use grid::SquareGrid;
pub use neighborhood::Neighborhood;
