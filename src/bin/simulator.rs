//! Headless autopilot simulator.
//!
//! Plays seeded rounds without a terminal, using the same session and
//! collision code as the game, and prints a score summary.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Rounds to play (default: 100)
//!   --seed N        Seed of the first round (default: random)
//!   --max-ticks N   Stop a round after N ticks (default: 9000 = 5 minutes)
//!   --margin PX     Autopilot flap margin above the gap bottom (default: 10)
//!   --assets DIR    Use PNG sprites from DIR instead of the built-ins
//!   --json          Print the report as JSON
//!   --verbose       One line per round
//!   --quiet         Only the final summary line

use anyhow::{bail, Context, Result};
use flappy::assets::Assets;
use flappy::simulator::{run_simulation, SimConfig};
use std::path::PathBuf;

struct CliConfig {
    sim: SimConfig,
    assets: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Option<CliConfig>> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig {
        sim: SimConfig::default(),
        assets: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .with_context(|| format!("{} requires a value", flag))
        };
        match flag {
            "--runs" => config.sim.num_runs = value()?.parse().context("--runs requires a number")?,
            "--seed" => config.sim.seed = Some(value()?.parse().context("--seed requires a number")?),
            "--max-ticks" => {
                config.sim.max_ticks_per_run =
                    value()?.parse().context("--max-ticks requires a number")?
            }
            "--margin" => {
                config.sim.flap_margin = value()?.parse().context("--margin requires a number")?
            }
            "--assets" => config.assets = Some(PathBuf::from(value()?)),
            "--json" => config.json = true,
            "--verbose" => config.sim.verbosity = 2,
            "--quiet" => config.sim.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn print_usage() {
    eprintln!(
        "Flappy Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Rounds to play (default: 100)\n\
         \x20 --seed N        Seed of the first round (default: random)\n\
         \x20 --max-ticks N   Stop a round after N ticks (default: 9000)\n\
         \x20 --margin PX     Autopilot flap margin (default: 10)\n\
         \x20 --assets DIR    Use PNG sprites from DIR\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --verbose       One line per round\n\
         \x20 --quiet         Only the final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() -> Result<()> {
    let Some(config) = parse_args()? else {
        return Ok(());
    };

    let assets = Assets::load(config.assets.as_deref()).context("failed to load sprites")?;
    let report = run_simulation(&assets, &config.sim);

    if config.json {
        println!("{}", report.to_json());
    } else if config.sim.verbosity == 0 {
        println!(
            "runs={} avg={:.2} median={} best={} pipe={} ground={} timeout={}",
            report.num_runs,
            report.avg_score,
            report.median_score,
            report.best_score,
            report.pipe_crashes,
            report.ground_crashes,
            report.timeouts
        );
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
