//! Core types for the Temblor earthquake lattice simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the lattice coordinate type and the avalanche record shared by the
//! topology and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod avalanche;
pub mod site;

pub use avalanche::Avalanche;
pub use site::Site;
