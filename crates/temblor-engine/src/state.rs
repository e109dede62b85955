//! Double-buffered lattice state: force, threshold, and residual fields.
//!
//! The force field keeps two buffers that alternate between "published"
//! (the frozen snapshot a relaxation pass reads) and "staging" (the
//! buffer it writes). [`LatticeState::publish`] swaps their roles after
//! a pass, so a pass never observes its own writes. Threshold and
//! residual are fixed for the lifetime of the state.

/// Per-cell simulation state for a square lattice.
///
/// All buffers are flat row-major vectors of identical length
/// (`side * side`). The force buffers are mutated every pass and every
/// loading event; `threshold` and `residual` are immutable after
/// construction. The invariant `residual[i] <= threshold[i]` is
/// produced by the sampling-floor configuration and is not re-checked
/// here.
#[derive(Clone, Debug)]
pub struct LatticeState {
    force: Vec<f64>,
    staging: Vec<f64>,
    threshold: Vec<f64>,
    residual: Vec<f64>,
}

impl LatticeState {
    /// Assemble state from explicit field buffers.
    ///
    /// # Panics
    ///
    /// Panics if the buffers differ in length. The engine constructor
    /// always hands in `side²`-length buffers; this guards direct
    /// construction in benches and tests.
    pub fn new(force: Vec<f64>, threshold: Vec<f64>, residual: Vec<f64>) -> Self {
        assert_eq!(force.len(), threshold.len(), "field buffer length mismatch");
        assert_eq!(force.len(), residual.len(), "field buffer length mismatch");
        let staging = force.clone();
        Self {
            force,
            staging,
            threshold,
            residual,
        }
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.force.len()
    }

    /// The published force buffer.
    pub fn force(&self) -> &[f64] {
        &self.force
    }

    /// The threshold field.
    pub fn threshold(&self) -> &[f64] {
        &self.threshold
    }

    /// The residual field.
    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    /// Begin a relaxation pass: reset staging to a copy of the
    /// published buffer.
    pub fn begin_pass(&mut self) {
        self.staging.copy_from_slice(&self.force);
    }

    /// Split borrow for one pass: `(force, threshold, residual,
    /// staging)` — the three frozen read buffers plus the writable
    /// staging buffer.
    pub fn pass_buffers(&mut self) -> (&[f64], &[f64], &[f64], &mut [f64]) {
        (
            &self.force,
            &self.threshold,
            &self.residual,
            &mut self.staging,
        )
    }

    /// Publish the staging buffer: staging and published swap roles.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.force, &mut self.staging);
    }

    /// Add `amount` to every cell of the published force buffer.
    ///
    /// Used by the driving controller between passes; the staging
    /// buffer is rebuilt by [`begin_pass`](Self::begin_pass) anyway.
    pub fn raise_uniform(&mut self, amount: f64) {
        for f in &mut self.force {
            *f += amount;
        }
    }

    /// Consume the state, yielding the published force buffer.
    pub fn into_force(self) -> Vec<f64> {
        self.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state3() -> LatticeState {
        LatticeState::new(vec![1.0, 2.0, 3.0], vec![4.0; 3], vec![0.5; 3])
    }

    #[test]
    fn publish_swaps_buffers() {
        let mut s = state3();
        s.begin_pass();
        {
            let (force, _, _, staging) = s.pass_buffers();
            assert_eq!(force, &*staging);
            staging[0] = 9.0;
        }
        s.publish();
        assert_eq!(s.force(), &[9.0, 2.0, 3.0]);
    }

    #[test]
    fn begin_pass_discards_stale_staging() {
        let mut s = state3();
        s.begin_pass();
        s.pass_buffers().3[1] = 42.0;
        s.publish();
        // Next pass starts from the newly published values, not from
        // the retired buffer's leftovers.
        s.begin_pass();
        assert_eq!(*s.pass_buffers().3, [1.0, 42.0, 3.0]);
    }

    #[test]
    fn raise_uniform_touches_every_cell() {
        let mut s = state3();
        s.raise_uniform(0.5);
        assert_eq!(s.force(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn fixed_fields_unaffected_by_publish() {
        let mut s = state3();
        s.begin_pass();
        s.publish();
        assert_eq!(s.threshold(), &[4.0; 3]);
        assert_eq!(s.residual(), &[0.5; 3]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn mismatched_buffers_panic() {
        LatticeState::new(vec![0.0; 4], vec![0.0; 3], vec![0.0; 4]);
    }

    #[test]
    fn into_force_returns_published() {
        let mut s = state3();
        s.begin_pass();
        s.pass_buffers().3[2] = 7.0;
        s.publish();
        assert_eq!(s.into_force(), vec![1.0, 2.0, 7.0]);
    }
}
