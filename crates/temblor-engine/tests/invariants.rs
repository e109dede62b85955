//! Property suites over whole simulation runs.

use proptest::prelude::*;
use temblor_engine::{FieldDistribution, SimConfig, Simulation};
use temblor_grid::Neighborhood;

fn arb_neighborhood() -> impl Strategy<Value = Neighborhood> {
    prop_oneof![Just(Neighborhood::Moore), Just(Neighborhood::VonNeumann)]
}

fn arb_config() -> impl Strategy<Value = SimConfig> {
    (
        3u32..8,
        0.2f64..0.9,
        arb_neighborhood(),
        0u64..30,
        1u64..6,
        any::<u64>(),
    )
        .prop_map(
            |(side, alpha, neighborhood, additions, snapshot_every, seed)| SimConfig {
                side,
                alpha,
                neighborhood,
                additions,
                snapshot_every,
                seed,
                threshold: FieldDistribution::constant(4.0),
                residual: FieldDistribution::constant(0.0),
                max_passes: None,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn recorded_avalanches_equal_budget(config in arb_config()) {
        let additions = config.additions;
        let run = Simulation::new(config).unwrap().run().unwrap();
        prop_assert_eq!(run.avalanche_sizes.len() as u64, additions);
        prop_assert_eq!(run.avalanche_steps.len() as u64, additions);
        prop_assert_eq!(run.metrics.loads, additions);
    }

    #[test]
    fn totals_are_step_sums(config in arb_config()) {
        let run = Simulation::new(config).unwrap().run().unwrap();
        for (size, steps) in run.avalanche_sizes.iter().zip(&run.avalanche_steps) {
            prop_assert_eq!(*size, steps.iter().sum::<u64>());
        }
        prop_assert_eq!(
            run.settling.total(),
            run.settling.steps().iter().sum::<u64>()
        );
    }

    #[test]
    fn terminal_lattice_is_quiescent_and_floored(config in arb_config()) {
        let run = Simulation::new(config).unwrap().run().unwrap();
        // Strictly below threshold at quiescence; never below the
        // residual with a residual of zero.
        prop_assert!(run.final_force.iter().all(|&f| f < 4.0));
        prop_assert!(run.final_force.iter().all(|&f| f >= 0.0));
    }

    #[test]
    fn runs_are_reproducible(config in arb_config()) {
        let a = Simulation::new(config.clone()).unwrap().run().unwrap();
        let b = Simulation::new(config).unwrap().run().unwrap();
        prop_assert_eq!(a.avalanche_sizes, b.avalanche_sizes);
        prop_assert_eq!(a.final_force, b.final_force);
        prop_assert_eq!(a.snapshots.len(), b.snapshots.len());
    }

    #[test]
    fn snapshots_follow_the_interval(config in arb_config()) {
        let every = config.snapshot_every;
        let run = Simulation::new(config).unwrap().run().unwrap();
        prop_assert_eq!(run.snapshots.len() as u64, run.metrics.passes / every);
    }
}
