//! Histogram filter localization example
//!
//! Runs the filter on the built-in 4×5 red/green world or on a scenario file
//! and prints the final belief grid.

use clap::Parser;
use histogram_filter_rs::scenario::SAMPLE_TOLERANCE;
use histogram_filter_rs::{LoggingReporter, NoOpReporter, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file (defaults to the built-in sample world)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Decimal places when printing the grid
    #[arg(short, long, default_value_t = 5)]
    precision: usize,

    /// Print the full output (grid and per-step estimates) as JSON
    #[arg(short, long)]
    json: bool,

    /// Log every step (set RUST_LOG=trace to include grids)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    }

    let scenario = match &args.scenario {
        Some(path) => match Scenario::load(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {}", e);
                std::process::exit(1);
            }
        },
        None => Scenario::sample(),
    };

    let result = if args.verbose {
        scenario.run_with_reporter(&mut LoggingReporter::verbose())
    } else {
        scenario.run_with_reporter(&mut NoOpReporter)
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Localization failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", output.to_json_pretty());
        return;
    }

    let name = if scenario.name.is_empty() {
        "unnamed"
    } else {
        scenario.name.as_str()
    };
    println!("Histogram Filter Localization");
    println!("=============================");
    println!("Scenario: {}", name);
    println!("Grid: {}x{}", output.belief.height(), output.belief.width());
    println!("Steps: {}", output.num_timesteps());
    println!("sensor_right: {}", scenario.sensor_right);
    println!("p_move: {}", scenario.p_move);
    println!();

    println!("Final belief:");
    println!("{}", output.belief.format_with_precision(args.precision));
    println!();

    if let Some(estimate) = output.last_estimate() {
        println!(
            "Most likely cell: ({}, {}) with p={:.5}",
            estimate.cell.0, estimate.cell.1, estimate.probability
        );
    }

    if let Some(deviation) = scenario.deviation_from_expected(&output.belief) {
        let verdict = if deviation <= SAMPLE_TOLERANCE {
            "OK"
        } else {
            "MISMATCH"
        };
        println!(
            "Max deviation from expected: {:.2e} ({})",
            deviation, verdict
        );
    }
}
