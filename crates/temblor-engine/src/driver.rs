//! The driving controller: quiescence-triggered uniform loading.
//!
//! When a relaxation pass reports zero active sites, the controller
//! finds the cell with the smallest threshold margin and raises the
//! whole lattice by that margin, pushing exactly that cell to its
//! threshold. Every cell receives the margin — uniform tectonic
//! loading — rather than only the selected cell. Each load consumes
//! one unit of a finite addition budget; an exhausted budget is the
//! simulation's termination condition.

use crate::state::LatticeState;

/// Uniform lattice-wide loading with a finite addition budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrivingController {
    remaining: u64,
}

impl DrivingController {
    /// Controller with `additions` loading events available.
    pub fn new(additions: u64) -> Self {
        Self {
            remaining: additions,
        }
    }

    /// Loading events left in the budget.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Load the lattice out of quiescence.
    ///
    /// Finds the cell minimising `threshold - force` (ties resolve to
    /// the first minimum in row-major order), adds that margin to
    /// every cell, and consumes one addition. Returns the applied
    /// margin, or `None` when the budget is exhausted.
    ///
    /// Must only be called at quiescence; at quiescence every margin
    /// is positive, so the selected cell lands exactly at its
    /// threshold and every other cell stays below its own.
    pub fn load(&mut self, state: &mut LatticeState) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }

        let mut margin = f64::INFINITY;
        for (f, t) in state.force().iter().zip(state.threshold()) {
            let gap = t - f;
            if gap < margin {
                margin = gap;
            }
        }

        state.raise_uniform(margin);
        self.remaining -= 1;
        Some(margin)
    }
}
