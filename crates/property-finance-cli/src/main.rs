mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculator::CalculateArgs;
use commands::investment::RoiArgs;
use commands::mortgage::MortgageArgs;

/// Mortgage and rental investment calculator
#[derive(Parser)]
#[command(
    name = "pfc",
    version,
    about = "Mortgage amortization and rental investment projections",
    long_about = "A CLI for the property calculator engine with decimal precision. \
                  Computes level mortgage payments with a yearly amortization schedule, \
                  and rental ROI projections with compound appreciation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed-rate mortgage payment and amortization schedule
    Mortgage(MortgageArgs),
    /// Rental property ROI projection
    Roi(RoiArgs),
    /// Run a mode-tagged calculator request from a file or stdin
    Calculate(CalculateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::Roi(args) => commands::investment::run_roi(args),
        Commands::Calculate(args) => commands::calculator::run_calculate(args),
        Commands::Version => {
            println!("pfc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            log::debug!("writing {:?} output", cli.output);
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
