//! Integration test: headless autopilot batches
//!
//! Runs the simulator against the built-in sprites and checks that reports
//! are internally consistent and reproducible from a seed.

use flappy::assets::Assets;
use flappy::simulator::{run_round, run_simulation, Outcome, SimConfig};

fn config(seed: u64) -> SimConfig {
    SimConfig {
        verbosity: 0,
        ..SimConfig::quick(seed)
    }
}

#[test]
fn test_report_counts_every_round() {
    let assets = Assets::builtin();
    let report = run_simulation(&assets, &config(42));

    assert_eq!(report.num_runs, 10);
    assert_eq!(report.rounds.len(), 10);
    assert_eq!(
        report.pipe_crashes + report.ground_crashes + report.timeouts,
        report.num_runs
    );
    assert_eq!(report.score_distribution.values().sum::<u32>(), 10);
    assert!(report.rounds.iter().all(|r| r.score <= report.best_score));
}

#[test]
fn test_batches_are_reproducible() {
    let assets = Assets::builtin();
    let a = run_simulation(&assets, &config(7));
    let b = run_simulation(&assets, &config(7));
    assert_eq!(a.rounds, b.rounds);
}

#[test]
fn test_rounds_end_by_crash_or_cap() {
    let assets = Assets::builtin();
    let config = config(3);
    for seed in 3..8 {
        let round = run_round(&assets, seed, &config);
        match round.outcome {
            Outcome::TimedOut => assert_eq!(round.ticks, config.max_ticks_per_run),
            Outcome::HitPipe | Outcome::HitGround => {
                assert!(round.ticks <= config.max_ticks_per_run)
            }
        }
    }
}
