//! Lattice path deviation simulator CLI.
//!
//! Run Monte Carlo simulations of random monotone lattice walks.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100k trials on 11x7
//!   cargo run --bin simulate -- -m 5 -n 5 -t 1000
//!   cargo run --bin simulate -- --seed 42      # Reproducible run
//!   cargo run --bin simulate -- --tall         # 100k trials on 23x31

use gridwalk::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GRIDWALK DEVIATION SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Grid:           {} x {}", config.m, config.n);
    println!("  Trials:         {}", config.num_trials);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Simulation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-m" | "--width" => {
                if i + 1 < args.len() {
                    config.m = args[i + 1].parse().unwrap_or(11);
                    i += 1;
                }
            }
            "-n" | "--height" => {
                if i + 1 < args.len() {
                    config.n = args[i + 1].parse().unwrap_or(7);
                    i += 1;
                }
            }
            "-t" | "--trials" => {
                if i + 1 < args.len() {
                    config.num_trials = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--wide" => {
                config = SimConfig::wide_grid();
            }
            "--tall" => {
                config = SimConfig::tall_grid();
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Gridwalk Deviation Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -m, --width <M>     Horizontal grid bound (default: 11)");
    println!("    -n, --height <N>    Vertical grid bound (default: 7)");
    println!("    -t, --trials <T>    Number of trials (default: 100,000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --wide              Reference grid 11x7, 100k trials");
    println!("    --tall              Reference grid 23x31, 100k trials");
    println!("    -v, --verbose       Per-trial output");
    println!("    --quiet             Suppress progress output");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -m 5 -n 5 -t 1000");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- --tall --json  # 23x31, save JSON");
}
