//! Step-by-step trace of the histogram filter
//!
//! Prints the grid after every motion and measurement update of a scenario.

use clap::Parser;
use histogram_filter_rs::{DebugReporter, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file (defaults to the built-in sample world)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Decimal places when printing grids
    #[arg(short, long, default_value_t = 4)]
    precision: usize,
}

fn main() {
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path),
        None => Ok(Scenario::sample()),
    };
    let scenario = match scenario {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load scenario: {}", e);
            std::process::exit(1);
        }
    };

    let mut reporter = DebugReporter::new();
    let result = scenario.run_with_reporter(&mut reporter);

    let p = args.precision;

    if let Some(prior) = reporter.prior() {
        println!("Prior:");
        println!("{:.*}", p, prior);
        println!();
    }

    for ((step, displacement, moved), (_, observation, posterior)) in reporter
        .motion_events()
        .iter()
        .zip(reporter.measurement_events())
    {
        println!("Step {} - move {}:", step, displacement);
        println!("{:.*}", p, moved);
        println!();
        println!("Step {} - sense {}:", step, observation);
        println!("{:.*}", p, posterior);
        println!();
    }

    for estimate in reporter.step_estimates() {
        println!(
            "  t={:3}: most likely ({}, {}) p={:.5}",
            estimate.step, estimate.cell.0, estimate.cell.1, estimate.probability
        );
    }

    // Steps completed before a failure are printed above
    if let Err(e) = result {
        eprintln!("Localization failed: {}", e);
        std::process::exit(1);
    }
}
