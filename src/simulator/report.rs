//! Simulation report generation.

use crate::game::{GameResult, Strategy};
use serde::Serialize;

/// Win tally for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyStats {
    pub strategy: Strategy,
    pub wins: u32,
    /// Percentage of all games, 0-100.
    pub win_rate: f64,
}

/// Aggregated results from a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_games: u32,
    pub max_turns: u32,
    /// Games whose turn count equals the cap. Unlike `GameResult::timed_out`,
    /// this also counts a game whose last elimination fell on the cap turn.
    pub timed_out: u32,
    pub avg_turns: f64,
    pub min_turns: u32,
    pub median_turns: u32,
    pub max_turns_played: u32,

    /// One entry per strategy, in strategy order.
    pub strategies: Vec<StrategyStats>,
    /// Most wins; ties go to the lower strategy index.
    pub best_strategy: Option<Strategy>,

    #[serde(skip)]
    pub results: Vec<GameResult>,
}

impl SimReport {
    pub fn from_results(results: Vec<GameResult>, max_turns: u32) -> Self {
        let num_games = results.len() as u32;
        let timed_out = results.iter().filter(|r| r.turns == max_turns).count() as u32;
        let avg_turns =
            results.iter().map(|r| r.turns as f64).sum::<f64>() / num_games.max(1) as f64;

        let mut sorted_turns: Vec<u32> = results.iter().map(|r| r.turns).collect();
        sorted_turns.sort_unstable();
        let min_turns = sorted_turns.first().copied().unwrap_or(0);
        let max_turns_played = sorted_turns.last().copied().unwrap_or(0);
        let median_turns = sorted_turns.get(sorted_turns.len() / 2).copied().unwrap_or(0);

        let mut wins = [0u32; 4];
        for result in &results {
            wins[result.winner.index()] += 1;
        }

        let strategies: Vec<StrategyStats> = Strategy::ALL
            .iter()
            .map(|&strategy| {
                let w = wins[strategy.index()];
                StrategyStats {
                    strategy,
                    wins: w,
                    win_rate: if num_games > 0 {
                        w as f64 / num_games as f64 * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        let best_strategy = strategies
            .iter()
            .filter(|s| s.wins > 0)
            .reduce(|best, s| if s.wins > best.wins { s } else { best })
            .map(|s| s.strategy);

        Self {
            num_games,
            max_turns,
            timed_out,
            avg_turns,
            min_turns,
            median_turns,
            max_turns_played,
            strategies,
            best_strategy,
            results,
        }
    }

    pub fn timeout_rate(&self) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        self.timed_out as f64 / self.num_games as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Games: {} total, {} timed out ({:.1}%) at {} turns\n\n",
            self.num_games,
            self.timed_out,
            self.timeout_rate(),
            self.max_turns
        ));

        report.push_str("── TURNS ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Average:  {:.1}\n", self.avg_turns));
        report.push_str(&format!("  Min:      {}\n", self.min_turns));
        report.push_str(&format!("  Median:   {}\n", self.median_turns));
        report.push_str(&format!("  Max:      {}\n\n", self.max_turns_played));

        report.push_str("── WINS BY STRATEGY ─────────────────────────────────────────────\n");
        for stats in &self.strategies {
            let bar = "█".repeat((stats.win_rate / 5.0) as usize);
            report.push_str(&format!(
                "  {:<10} {:>5} {:>6.1}% {}\n",
                stats.strategy.name(),
                stats.wins,
                stats.win_rate,
                bar
            ));
        }
        report.push('\n');

        match self.best_strategy {
            Some(best) => report.push_str(&format!("  Most wins: {}\n", best)),
            None => report.push_str("  Most wins: -\n"),
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
