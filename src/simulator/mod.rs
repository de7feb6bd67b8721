//! Headless autopilot runs for tuning and regression checks.
//!
//! Plays many seeded rounds through the same [`Session`](crate::game::Session)
//! the terminal game uses, with a scripted pilot pressing jump, and summarises
//! how far it gets.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_round, run_simulation, Outcome, RoundStats};
