//! Command-line interface for numguess.

use clap::{Parser, Subcommand};
use numguess::Difficulty;

/// Number guessing game with a JSON API and a terminal front-end
#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(about = "Number guessing game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file (ignored if missing)
        #[arg(short, long, default_value = "numguess.toml")]
        config: std::path::PathBuf,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Seed for reproducible target numbers
        #[arg(long)]
        seed: Option<u64>,

        /// Difficulty for requests that do not name one
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Play in the terminal
    Play {
        /// Starting difficulty (easy or hard)
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Seed for reproducible target numbers
        #[arg(long)]
        seed: Option<u64>,
    },
}
