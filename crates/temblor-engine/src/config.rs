//! Simulation configuration and fail-fast validation.
//!
//! [`SimConfig`] is the plain-data input for constructing a
//! [`Simulation`](crate::run::Simulation). [`SimConfig::validate`]
//! checks every structural invariant up front, before any simulation
//! state exists; all configuration failures are deterministic and
//! surface synchronously.

use std::error::Error;
use std::fmt;

use temblor_grid::{GridError, Neighborhood};

/// Parameters of a floored-normal field distribution.
///
/// Values are drawn from `N(mean, std_dev)` and clamped below at
/// `floor`. A zero `std_dev` degenerates to the constant
/// `max(mean, floor)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDistribution {
    /// Mean of the underlying normal distribution.
    pub mean: f64,
    /// Standard deviation. Zero yields a uniform field.
    pub std_dev: f64,
    /// Hard lower floor applied after drawing.
    pub floor: f64,
}

impl FieldDistribution {
    /// A zero-variance distribution: every cell equals `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            mean: value,
            std_dev: 0.0,
            floor: value,
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.mean.is_finite() {
            return Err(ConfigError::InvalidDistribution {
                field,
                reason: format!("mean must be finite, got {}", self.mean),
            });
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ConfigError::InvalidDistribution {
                field,
                reason: format!("std_dev must be finite and >= 0, got {}", self.std_dev),
            });
        }
        if !self.floor.is_finite() {
            return Err(ConfigError::InvalidDistribution {
                field,
                reason: format!("floor must be finite, got {}", self.floor),
            });
        }
        Ok(())
    }
}

/// Complete configuration for one simulation run.
///
/// The default mirrors the classic setup: a 25×25 Moore lattice,
/// coupling 0.5, uniform threshold 4.0, uniform residual 1.0, and
/// 10 000 additions.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Lattice side length. Minimum 2: a single-cell lattice has no
    /// neighbours to redistribute to.
    pub side: u32,
    /// Coupling fraction in `(0, 1]`: the share of a relaxing site's
    /// excess redistributed to its neighbours. The remainder
    /// dissipates.
    pub alpha: f64,
    /// Neighbour connectivity.
    pub neighborhood: Neighborhood,
    /// Threshold field distribution.
    pub threshold: FieldDistribution,
    /// Residual field distribution. Keep its floor at or below the
    /// threshold floor so relaxed sites settle under their thresholds;
    /// this is a range expectation on the caller, not enforced here.
    pub residual: FieldDistribution,
    /// Total loading events available to the driver.
    pub additions: u64,
    /// Copy a force snapshot every Nth relaxation pass. Minimum 1;
    /// 1 records every pass.
    pub snapshot_every: u64,
    /// Seed for the ChaCha8 stream feeding the initial force field and
    /// both field samplers.
    pub seed: u64,
    /// Optional hard cap on relaxation passes. `None` (the default)
    /// never aborts; whether a parameter choice terminates is the
    /// caller's responsibility.
    pub max_passes: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            side: 25,
            alpha: 0.5,
            neighborhood: Neighborhood::Moore,
            threshold: FieldDistribution::constant(4.0),
            residual: FieldDistribution::constant(1.0),
            additions: 10_000,
            snapshot_every: 25,
            seed: 0,
            max_passes: None,
        }
    }
}

impl SimConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. A redistribution pass divides by the neighbour count, so
        //    every site needs at least one in-bounds neighbour; a 1×1
        //    lattice has none.
        if self.side < 2 {
            return Err(ConfigError::DegenerateLattice { side: self.side });
        }
        // 2. alpha in (0, 1].
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(ConfigError::InvalidAlpha { value: self.alpha });
        }
        // 3. Distribution parameters must be finite, std_dev >= 0.
        self.threshold.validate("threshold")?;
        self.residual.validate("residual")?;
        // 4. The snapshot interval is used as a modulus.
        if self.snapshot_every == 0 {
            return Err(ConfigError::SnapshotIntervalZero);
        }
        Ok(())
    }

    /// Number of cells on the configured lattice.
    pub fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }
}

/// Errors detected during [`SimConfig::validate()`] or simulation
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid construction failed.
    Grid(GridError),
    /// Lattice side below the two-cell minimum — a 1×1 lattice leaves
    /// the redistribution divisor at zero.
    DegenerateLattice {
        /// The configured side length.
        side: u32,
    },
    /// `alpha` is NaN, infinite, non-positive, or above one.
    InvalidAlpha {
        /// The invalid value.
        value: f64,
    },
    /// A field distribution parameter failed validation.
    InvalidDistribution {
        /// Which field (`"threshold"` or `"residual"`).
        field: &'static str,
        /// Description of the failure.
        reason: String,
    },
    /// `snapshot_every` must be at least 1.
    SnapshotIntervalZero,
    /// An explicit initial force buffer has the wrong length.
    InitialForceLength {
        /// Expected `side * side`.
        expected: usize,
        /// Length actually provided.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::DegenerateLattice { side } => {
                write!(f, "lattice side {side} is below the minimum of 2")
            }
            Self::InvalidAlpha { value } => {
                write!(f, "alpha must be in (0, 1], got {value}")
            }
            Self::InvalidDistribution { field, reason } => {
                write!(f, "invalid {field} distribution: {reason}")
            }
            Self::SnapshotIntervalZero => {
                write!(f, "snapshot_every must be at least 1")
            }
            Self::InitialForceLength { expected, actual } => {
                write!(
                    f,
                    "initial force buffer has {actual} cells, lattice needs {expected}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
