//! The avalanche record: one cascade of relaxation passes.

/// One complete cascade between two quiescent states.
///
/// An avalanche opens when the driver loads the lattice out of
/// quiescence (or, for the settling cascade, when the simulation
/// starts) and closes when a relaxation pass reports zero active
/// sites. Each entry is the active-site count of one pass, in pass
/// order; the terminating zero-count pass is part of the record, so a
/// cascade that never fires is `[0]` rather than empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Avalanche {
    steps: Vec<u64>,
}

impl Avalanche {
    /// An empty record with no passes yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the active-site count of one relaxation pass.
    pub fn record_pass(&mut self, active_sites: u64) {
        self.steps.push(active_sites);
    }

    /// Total avalanche size: the sum of all per-pass active-site counts.
    pub fn total(&self) -> u64 {
        self.steps.iter().sum()
    }

    /// Per-pass active-site counts, in pass order.
    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    /// Consume the record, yielding the step sequence.
    pub fn into_steps(self) -> Vec<u64> {
        self.steps
    }

    /// Number of relaxation passes recorded.
    pub fn passes(&self) -> usize {
        self.steps.len()
    }

    /// `true` if no pass has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
