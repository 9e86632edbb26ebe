//! Strategy comparison CLI.
//!
//! Usage:
//!   landlord [NUMBER_OF_SIMULATIONS] [MAX_TURNS] [OPTIONS]
//!
//! Examples:
//!   landlord                      # 300 games, 1000 turn cap
//!   landlord 5000 500 --parallel  # bigger batch on all cores
//!   landlord --seed 42 --json     # reproducible run, JSON report saved

use clap::{CommandFactory, FromArgMatches, Parser};
use landlord::build_info::version_string;
use landlord::core::constants::{DEFAULT_MAX_TURNS, DEFAULT_SIMULATIONS};
use landlord::{run_simulation, SimConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "landlord",
    about = "Monte Carlo comparison of property-buying strategies"
)]
struct Cli {
    /// Number of games to simulate
    #[arg(default_value_t = DEFAULT_SIMULATIONS)]
    number_of_simulations: u32,

    /// Player-turn cap per game (at least 4)
    #[arg(default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Base random seed for reproducible batches
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run games on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Also save the report as JSON
    #[arg(long)]
    json: bool,

    /// Log per-game and per-turn events (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            num_simulations: self.number_of_simulations,
            max_turns: self.max_turns,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "landlord=debug" } else { "landlord=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let matches = Cli::command().version(version_string()).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    init_tracing(cli.verbose);

    let config = cli.config();
    if let Err(e) = config.validate() {
        eprintln!("Invalid input parameters: {e}");
        return ExitCode::FAILURE;
    }

    println!("Configuration:");
    println!("  Games:      {}", config.num_simulations);
    println!("  Max Turns:  {}", config.max_turns);
    if let Some(seed) = config.seed {
        println!("  Seed:       {}", seed);
    }
    if config.parallel {
        println!("  Parallel:   yes");
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if cli.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write {}: {}", filename, e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}
