use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lessons", version, about = "Small Rust lessons: shared state and FizzBuzz")]
pub struct Cli {
    /// Log at debug level (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the Car example (shared vs per-record state)
    Car {
        /// Also print both cars as JSON at the end
        #[arg(long)]
        json: bool,
    },
    /// Ask for a name and a number, then FizzBuzz up to it
    Fizzbuzz,
    /// Print the FizzBuzz sequence alone, no prompts
    Sequence {
        /// Count from 1 up to this number
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
}

/// Logs go to stderr so stdout stays a clean transcript
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
