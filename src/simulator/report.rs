//! Simulation report generation.

use super::runner::{Outcome, RoundStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from a batch of rounds.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub max_ticks_per_run: u64,

    pub avg_score: f64,
    pub median_score: u32,
    pub best_score: u32,
    pub avg_ticks: f64,
    pub avg_flaps: f64,

    pub pipe_crashes: u32,
    pub ground_crashes: u32,
    pub timeouts: u32,

    /// Score -> number of rounds ending on it
    pub score_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub rounds: Vec<RoundStats>,
}

impl SimReport {
    pub fn from_rounds(rounds: Vec<RoundStats>, max_ticks_per_run: u64) -> Self {
        let num_runs = rounds.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let avg_score = rounds.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_ticks = rounds.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let avg_flaps = rounds.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor;
        let best_score = rounds.iter().map(|r| r.score).max().unwrap_or(0);
        let median_score = {
            let mut sorted: Vec<u32> = rounds.iter().map(|r| r.score).collect();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };

        let count = |outcome: Outcome| rounds.iter().filter(|r| r.outcome == outcome).count() as u32;
        let pipe_crashes = count(Outcome::HitPipe);
        let ground_crashes = count(Outcome::HitGround);
        let timeouts = count(Outcome::TimedOut);

        let mut score_distribution = BTreeMap::new();
        for round in &rounds {
            *score_distribution.entry(round.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            max_ticks_per_run,
            avg_score,
            median_score,
            best_score,
            avg_ticks,
            avg_flaps,
            pipe_crashes,
            ground_crashes,
            timeouts,
            score_distribution,
            rounds,
        }
    }

    fn percent(&self, n: u32) -> f64 {
        n as f64 / self.num_runs.max(1) as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    AUTOPILOT REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Rounds: {} (cap {} ticks each)\n\n",
            self.num_runs, self.max_ticks_per_run
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:     {:.2}\n", self.avg_score));
        report.push_str(&format!("  Median Score:  {}\n", self.median_score));
        report.push_str(&format!("  Best Score:    {}\n", self.best_score));
        report.push_str(&format!("  Avg Ticks:     {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  Avg Flaps:     {:.1}\n\n", self.avg_flaps));

        report.push_str("── ENDINGS ──────────────────────────────────────────────────────\n");
        for (label, n) in [
            ("Pipe", self.pipe_crashes),
            ("Ground", self.ground_crashes),
            ("Timed out", self.timeouts),
        ] {
            report.push_str(&format!(
                "  {:<10} {:>5} ({:>5.1}%)\n",
                label,
                n,
                self.percent(n)
            ));
        }
        report.push('\n');

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, n) in &self.score_distribution {
            let pct = self.percent(*n);
            let bar = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:>4}: {:>5.1}% {}\n", score, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
