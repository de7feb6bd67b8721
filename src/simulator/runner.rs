//! Round runner driving a real [`Session`] with the autopilot.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::SimReport;
use crate::game::{GameEvent, Session, SessionState, SpriteSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    HitPipe,
    HitGround,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundStats {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub flaps: u32,
    pub outcome: Outcome,
}

/// Play one round from a fresh session seeded with `seed`.
pub fn run_round<S: SpriteSet>(sprites: &S, seed: u64, config: &SimConfig) -> RoundStats {
    let mut session = Session::new(sprites, ChaCha8Rng::seed_from_u64(seed));
    let pilot = Autopilot::new(config.flap_margin);
    let mut flaps = 0;

    while session.state() == SessionState::Playing
        && session.world().ticks < config.max_ticks_per_run
    {
        let events: &[GameEvent] = if pilot.should_flap(session.world(), session.sprites()) {
            flaps += 1;
            &[GameEvent::Jump]
        } else {
            &[]
        };
        session.tick(events);
    }

    let world = session.world();
    let outcome = if world.bird.colliding_pipe {
        Outcome::HitPipe
    } else if world.bird.colliding_base {
        Outcome::HitGround
    } else {
        Outcome::TimedOut
    };

    RoundStats {
        seed,
        score: world.score,
        ticks: world.ticks,
        flaps,
        outcome,
    }
}

/// Run every round of the batch and return a report.
pub fn run_simulation<S: SpriteSet>(sprites: &S, config: &SimConfig) -> SimReport {
    let first_seed = config.seed.unwrap_or_else(rand::random);
    let mut rounds = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let round = run_round(sprites, first_seed.wrapping_add(run_idx as u64), config);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - seed {}, score {}, ticks {}, flaps {}, {:?}",
                run_idx + 1,
                config.num_runs,
                round.seed,
                round.score,
                round.ticks,
                round.flaps,
                round.outcome
            );
        }
        rounds.push(round);
    }

    SimReport::from_rounds(rounds, config.max_ticks_per_run)
}
