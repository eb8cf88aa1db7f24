//! Conquid CLI - play and inspect rhythm-gated territory games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Conquid - a rhythm-gated territory game
#[derive(Parser, Debug)]
#[command(name = "conquid")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive two-player game in the terminal
    Play {
        /// Configuration file (JSON, default: built-in settings)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print a dry run of the rhythm clock beat-by-beat
    Patterns {
        /// Routine beat pattern
        #[arg(long, default_value = "+++=--")]
        routine: String,

        /// Pulse beat pattern
        #[arg(long, default_value = "=++++++-")]
        pulse: String,

        /// Tick interval in milliseconds
        #[arg(short, long, default_value = "125")]
        interval: u64,

        /// Number of ticks to print (default: one full super-cycle)
        #[arg(short, long)]
        ticks: Option<usize>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { config } => cli::play::execute(config),

        Commands::Patterns {
            routine,
            pulse,
            interval,
            ticks,
        } => cli::patterns::execute(&routine, &pulse, interval, ticks),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
