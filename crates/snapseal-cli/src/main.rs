//! SnapSeal CLI
//!
//! Command-line interface for sealing, finalizing, and verifying
//! AI-image-generation proof records

use clap::{Parser, Subcommand};
use snapseal_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "snapseal")]
#[command(about = "SnapSeal - Tamper-evident proof records for AI image generation", long_about = None)]
struct Cli {
    /// Emit JSON logs instead of human-readable output
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seal images into a finalized, persisted proof record
    Prove(commands::prove::ProveArgs),
    /// Re-verify an exported proof record
    Verify(commands::verify::VerifyArgs),
    /// Print a record's identity and snapshot summaries
    Inspect(commands::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Prove(args) => commands::prove::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
