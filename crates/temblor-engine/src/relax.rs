//! The redistribution pass: threshold scan, neighbour redistribution,
//! residual reset.
//!
//! Jacobi-style update: every read comes from the frozen published
//! force buffer, every write lands in the staging buffer, and the
//! buffers swap once the pass completes. All simultaneously active
//! sites are therefore processed against the same pre-pass snapshot —
//! a site cannot receive excess mid-pass and change the active-set
//! decision.

use crate::state::LatticeState;
use temblor_core::Site;
use temblor_grid::SquareGrid;

/// The relaxation engine.
///
/// Holds the coupling fraction `alpha` and a scratch list of active
/// sites reused across passes. One pass:
///
/// 1. Scan the published buffer row-major; a site is active iff
///    `force >= threshold`. Collect all active sites before mutating
///    anything.
/// 2. For each active site, in collection order: compute
///    `excess = force - residual` from the snapshot, add
///    `alpha * excess / n` to each of its `n` in-bounds neighbours'
///    staging entries, then overwrite its own staging entry with its
///    residual. The reset follows the site's own distribution, so a
///    share sent to it by an earlier active site is discarded while a
///    later site's share accumulates on top of the residual.
/// 3. Publish the staging buffer.
///
/// The fraction `1 - alpha` of each site's excess leaves the system —
/// the model's conservation-breaking dissipation. The distributed
/// share divides by the in-bounds neighbour count, so boundary sites
/// spread their full `alpha * excess` across a truncated neighbour
/// set.
#[derive(Debug)]
pub struct Redistribution {
    alpha: f64,
    active: Vec<Site>,
}

impl Redistribution {
    /// Engine redistributing the fraction `alpha` in `(0, 1]` of each
    /// relaxing site's excess.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            active: Vec::new(),
        }
    }

    /// Coupling fraction.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Run one relaxation pass over `state`.
    ///
    /// Returns the pre-pass active sites in row-major scan order. The
    /// caller normally only needs the length; the order is kept stable
    /// for reproducibility.
    pub fn pass<'a>(&'a mut self, grid: &SquareGrid, state: &mut LatticeState) -> &'a [Site] {
        let side = grid.side();
        self.active.clear();

        state.begin_pass();
        let (force, threshold, residual, staging) = state.pass_buffers();

        for site in grid.sites() {
            let i = site.index(side);
            if force[i] >= threshold[i] {
                self.active.push(site);
            }
        }

        for &site in &self.active {
            let i = site.index(side);
            let excess = force[i] - residual[i];
            let neighbours = grid.neighbours(site);
            debug_assert!(
                !neighbours.is_empty(),
                "degenerate lattice rejected at configuration time"
            );
            let share = self.alpha * excess / neighbours.len() as f64;
            for nb in neighbours {
                staging[nb.index(side)] += share;
            }
            staging[i] = residual[i];
        }

        state.publish();
        &self.active
    }
}
