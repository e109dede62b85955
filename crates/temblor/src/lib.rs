//! Temblor: a deterministic Olami-Feder-Christensen earthquake lattice
//! simulator.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Temblor sub-crates. For most users, adding `temblor` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use temblor::prelude::*;
//!
//! let config = SimConfig {
//!     side: 8,
//!     additions: 16,
//!     seed: 42,
//!     ..SimConfig::default()
//! };
//!
//! let run = Simulation::new(config).unwrap().run().unwrap();
//!
//! // One recorded avalanche per loading event, each total matching
//! // its step sequence.
//! assert_eq!(run.avalanche_sizes.len(), 16);
//! for (size, steps) in run.avalanche_sizes.iter().zip(&run.avalanche_steps) {
//!     assert_eq!(*size, steps.iter().sum::<u64>());
//! }
//!
//! // The lattice terminates quiescent: strictly below threshold.
//! assert!(run.final_force.iter().all(|&f| f < 4.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `temblor-core` | `Site`, the `Avalanche` record |
//! | [`grid`] | `temblor-grid` | `SquareGrid`, `Neighborhood`, errors |
//! | [`engine`] | `temblor-engine` | sampling, state, relaxation, driving, the `Simulation` loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use temblor_core as types;
pub use temblor_engine as engine;
pub use temblor_grid as grid;

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use temblor_core::{Avalanche, Site};
    pub use temblor_engine::{
        ConfigError, FieldDistribution, RunError, RunMetrics, SimConfig, Simulation,
        SimulationRun,
    };
    pub use temblor_grid::{GridError, Neighborhood, SquareGrid};
}
