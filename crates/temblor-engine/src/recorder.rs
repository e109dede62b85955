//! Avalanche and snapshot bookkeeping.
//!
//! [`AvalancheRecorder`] is a pure accumulator: the simulation loop
//! feeds it per-pass active-site counts and cascade boundaries, and it
//! produces the per-addition avalanche records, the settling cascade,
//! and the sampled force snapshots. It carries no simulation
//! semantics.

use temblor_core::Avalanche;

/// Upper bound on preallocation; absurd budgets fall back to growth.
const PREALLOC_CAP: usize = 1 << 20;

/// Accumulates avalanche records and sampled force snapshots.
///
/// The per-addition buffers are preallocated to the addition budget so
/// long runs do not pay reallocation churn on the hot path.
#[derive(Clone, Debug)]
pub struct AvalancheRecorder {
    sizes: Vec<u64>,
    steps: Vec<Vec<u64>>,
    settling: Avalanche,
    current: Avalanche,
    snapshots: Vec<Vec<f64>>,
    snapshot_every: u64,
    passes_seen: u64,
    settled: bool,
}

impl AvalancheRecorder {
    /// Recorder for a run with the given addition budget, copying a
    /// force snapshot every `snapshot_every`-th pass.
    pub fn new(additions: u64, snapshot_every: u64) -> Self {
        let cap = usize::try_from(additions)
            .unwrap_or(PREALLOC_CAP)
            .min(PREALLOC_CAP);
        Self {
            sizes: Vec::with_capacity(cap),
            steps: Vec::with_capacity(cap),
            settling: Avalanche::new(),
            current: Avalanche::new(),
            snapshots: Vec::new(),
            snapshot_every,
            passes_seen: 0,
            settled: false,
        }
    }

    /// Record one relaxation pass: its active-site count and, on every
    /// `snapshot_every`-th pass, a copy of the force field.
    pub fn record_pass(&mut self, active_sites: u64, force: &[f64]) {
        self.passes_seen += 1;
        self.current.record_pass(active_sites);
        if self.passes_seen % self.snapshot_every == 0 {
            self.snapshots.push(force.to_vec());
        }
    }

    /// Close the cascade in progress.
    ///
    /// The first close is the settling cascade — no driving event has
    /// happened yet — and is kept out of the per-addition records, so
    /// the per-addition count always equals the number of loading
    /// events consumed.
    pub fn close_cascade(&mut self) {
        let finished = std::mem::take(&mut self.current);
        if self.settled {
            self.sizes.push(finished.total());
            self.steps.push(finished.into_steps());
        } else {
            self.settling = finished;
            self.settled = true;
        }
    }

    /// Per-addition avalanche totals recorded so far.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Per-addition step sequences recorded so far.
    pub fn steps(&self) -> &[Vec<u64>] {
        &self.steps
    }

    /// The settling cascade, if it has closed.
    pub fn settling(&self) -> Option<&Avalanche> {
        self.settled.then_some(&self.settling)
    }

    /// Snapshots sampled so far.
    pub fn snapshots(&self) -> &[Vec<f64>] {
        &self.snapshots
    }

    /// Relaxation passes seen so far.
    pub fn passes_seen(&self) -> u64 {
        self.passes_seen
    }

    /// Tear down into `(sizes, steps, settling, snapshots)`.
    pub fn into_parts(self) -> (Vec<u64>, Vec<Vec<u64>>, Avalanche, Vec<Vec<f64>>) {
        (self.sizes, self.steps, self.settling, self.snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_close_is_settling() {
        let mut r = AvalancheRecorder::new(4, 1);
        r.record_pass(3, &[0.0]);
        r.record_pass(0, &[0.0]);
        assert!(r.settling().is_none());
        r.close_cascade();

        let settling = r.settling().unwrap();
        assert_eq!(settling.steps(), &[3, 0]);
        assert_eq!(settling.total(), 3);
        assert!(r.sizes().is_empty(), "settling is not a recorded avalanche");
    }

    #[test]
    fn later_closes_become_avalanches() {
        let mut r = AvalancheRecorder::new(4, 1);
        r.record_pass(0, &[0.0]);
        r.close_cascade(); // settling

        r.record_pass(2, &[0.0]);
        r.record_pass(1, &[0.0]);
        r.record_pass(0, &[0.0]);
        r.close_cascade();

        r.record_pass(5, &[0.0]);
        r.record_pass(0, &[0.0]);
        r.close_cascade();

        assert_eq!(r.sizes(), &[3, 5]);
        assert_eq!(r.steps().len(), 2);
        assert_eq!(r.steps()[0], vec![2, 1, 0]);
        assert_eq!(r.steps()[1], vec![5, 0]);
    }

    #[test]
    fn totals_equal_step_sums() {
        let mut r = AvalancheRecorder::new(2, 1);
        r.record_pass(0, &[0.0]);
        r.close_cascade();
        for counts in [vec![4, 2, 0], vec![1, 0]] {
            for &c in &counts {
                r.record_pass(c, &[0.0]);
            }
            r.close_cascade();
        }
        for (size, steps) in r.sizes().iter().zip(r.steps()) {
            assert_eq!(*size, steps.iter().sum::<u64>());
        }
    }

    #[test]
    fn snapshots_sample_every_nth_pass() {
        let mut r = AvalancheRecorder::new(1, 3);
        for pass in 1..=10u64 {
            r.record_pass(1, &[pass as f64]);
        }
        assert_eq!(r.passes_seen(), 10);
        // Passes 3, 6, 9 are sampled.
        assert_eq!(r.snapshots().len(), 3);
        assert_eq!(r.snapshots()[0], vec![3.0]);
        assert_eq!(r.snapshots()[2], vec![9.0]);
    }

    #[test]
    fn snapshot_every_pass_matches_reference_recording() {
        let mut r = AvalancheRecorder::new(1, 1);
        for pass in 1..=4u64 {
            r.record_pass(0, &[pass as f64]);
        }
        assert_eq!(r.snapshots().len(), 4);
    }

    #[test]
    fn into_parts_round_trip() {
        let mut r = AvalancheRecorder::new(1, 1);
        r.record_pass(2, &[1.0]);
        r.record_pass(0, &[2.0]);
        r.close_cascade();
        r.record_pass(0, &[3.0]);
        r.close_cascade();

        let (sizes, steps, settling, snapshots) = r.into_parts();
        assert_eq!(sizes, vec![0]);
        assert_eq!(steps, vec![vec![0]]);
        assert_eq!(settling.total(), 2);
        assert_eq!(snapshots.len(), 3);
    }
}
