//! The top-level simulation loop.
//!
//! [`Simulation`] owns the grid, the lattice state, the relaxation
//! engine, the driving controller, and the recorder, and advances
//! relaxation passes interleaved with loading events until the
//! addition budget drains at quiescence. All mutation funnels through
//! the single owning loop — there is exactly one writer of the force
//! field, and `run()` consumes the simulation.

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use temblor_core::Avalanche;
use temblor_grid::SquareGrid;

use crate::config::{ConfigError, SimConfig};
use crate::driver::DrivingController;
use crate::metrics::RunMetrics;
use crate::recorder::AvalancheRecorder;
use crate::relax::Redistribution;
use crate::sampler::{uniform_field, FlooredNormal};
use crate::state::LatticeState;

// ── RunError ────────────────────────────────────────────────────

/// Errors aborting a [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The configured relaxation-pass cap was reached before the
    /// addition budget drained.
    PassCapExceeded {
        /// The configured cap.
        cap: u64,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassCapExceeded { cap } => {
                write!(f, "relaxation-pass cap of {cap} exceeded")
            }
        }
    }
}

impl Error for RunError {}

// ── SimulationRun ───────────────────────────────────────────────

/// Everything a completed run hands to downstream consumers.
///
/// All snapshots are flat row-major `side * side` buffers with no
/// further structure or metadata; visualization and analysis
/// collaborators consume them as-is.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    /// The force field as initialised, before the first pass.
    pub initial_force: Vec<f64>,
    /// The force field at termination (quiescent).
    pub final_force: Vec<f64>,
    /// Per-addition avalanche totals: exactly one entry per loading
    /// event consumed.
    pub avalanche_sizes: Vec<u64>,
    /// Per-addition step sequences: active-site counts per pass, the
    /// terminating zero pass included.
    pub avalanche_steps: Vec<Vec<u64>>,
    /// The cascade that settled the initial field before any loading
    /// event. Not counted in `avalanche_sizes`.
    pub settling: Avalanche,
    /// Force snapshots sampled every `snapshot_every`-th pass.
    pub snapshots: Vec<Vec<f64>>,
    /// Aggregate counters for the run.
    pub metrics: RunMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// A configured simulation, ready to run to completion.
///
/// Construction seeds and samples all per-cell state;
/// [`run()`](Simulation::run) then alternates relaxation passes and
/// loading events until quiescence meets an exhausted budget.
///
/// # Example
///
/// ```
/// use temblor_engine::{SimConfig, Simulation};
///
/// let config = SimConfig {
///     side: 8,
///     additions: 16,
///     seed: 42,
///     ..SimConfig::default()
/// };
/// let run = Simulation::new(config).unwrap().run().unwrap();
/// assert_eq!(run.avalanche_sizes.len(), 16);
/// ```
#[derive(Debug)]
pub struct Simulation {
    grid: SquareGrid,
    state: LatticeState,
    engine: Redistribution,
    driver: DrivingController,
    recorder: AvalancheRecorder,
    initial_force: Vec<f64>,
    max_passes: Option<u64>,
    metrics: RunMetrics,
}

impl Simulation {
    /// Build a simulation with a seeded random initial force field.
    ///
    /// The seed feeds one ChaCha8 stream consumed in a fixed order —
    /// initial force (`U[0, 1)` per cell), then the threshold field,
    /// then the residual field — so identical configurations produce
    /// identical runs.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let force = uniform_field(&mut rng, config.cell_count());
        Self::build(config, force, rng)
    }

    /// Build a simulation from an explicit initial force field
    /// (row-major, `side * side` entries).
    ///
    /// The seed still feeds the threshold and residual samplers, in
    /// that order.
    pub fn with_initial_force(config: SimConfig, force: Vec<f64>) -> Result<Self, ConfigError> {
        config.validate()?;
        let expected = config.cell_count();
        if force.len() != expected {
            return Err(ConfigError::InitialForceLength {
                expected,
                actual: force.len(),
            });
        }
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::build(config, force, rng)
    }

    fn build(config: SimConfig, force: Vec<f64>, mut rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        let grid = SquareGrid::new(config.side, config.neighborhood)?;
        let n = grid.cell_count();

        let t = config.threshold;
        let threshold = FlooredNormal::new(t.mean, t.std_dev, t.floor).sample(&mut rng, n);
        let r = config.residual;
        let residual = FlooredNormal::new(r.mean, r.std_dev, r.floor).sample(&mut rng, n);

        let state = LatticeState::new(force.clone(), threshold, residual);
        Ok(Self {
            grid,
            state,
            engine: Redistribution::new(config.alpha),
            driver: DrivingController::new(config.additions),
            recorder: AvalancheRecorder::new(config.additions, config.snapshot_every),
            initial_force: force,
            max_passes: config.max_passes,
            metrics: RunMetrics::default(),
        })
    }

    /// The lattice topology.
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// Current lattice state (published force plus fixed fields).
    pub fn state(&self) -> &LatticeState {
        &self.state
    }

    /// Loading events left in the driver's budget.
    pub fn remaining_additions(&self) -> u64 {
        self.driver.remaining()
    }

    /// Run to completion.
    ///
    /// At least one relaxation pass always executes before the first
    /// quiescence check. Each quiescence closes the cascade in
    /// progress — the first as the settling cascade, the rest as
    /// per-addition avalanches — and either loads the lattice or, with
    /// the budget exhausted, terminates.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::PassCapExceeded`] if `max_passes` was
    /// configured and reached before termination.
    pub fn run(mut self) -> Result<SimulationRun, RunError> {
        loop {
            if let Some(cap) = self.max_passes {
                if self.metrics.passes >= cap {
                    return Err(RunError::PassCapExceeded { cap });
                }
            }

            let active = self.engine.pass(&self.grid, &mut self.state).len() as u64;
            self.metrics.passes += 1;
            self.metrics.total_activations += active;
            self.recorder.record_pass(active, self.state.force());

            if active > 0 {
                continue;
            }

            // Quiescence: close the cascade, then load or terminate.
            self.recorder.close_cascade();
            match self.driver.load(&mut self.state) {
                Some(_margin) => self.metrics.loads += 1,
                None => break,
            }
        }

        let (sizes, steps, settling, snapshots) = self.recorder.into_parts();
        self.metrics.largest_avalanche = sizes.iter().copied().max().unwrap_or(0);

        Ok(SimulationRun {
            initial_force: self.initial_force,
            final_force: self.state.into_force(),
            avalanche_sizes: sizes,
            avalanche_steps: steps,
            settling,
            snapshots,
            metrics: self.metrics,
        })
    }
}
