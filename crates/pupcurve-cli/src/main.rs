//! Pupcurve CLI
//!
//! Interactive command-line surface for the growth predictor.
//!
//! # Commands
//!
//! - `predict`: run one prediction request against the stub oracle and
//!   print a summary or the full response JSON
//! - `breeds`: list the breed levels the model was trained on
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Invalid query (user-recoverable; fix the input and resubmit)
//! - 2: Pipeline failure (degenerate scaling or oracle failure)

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::CliExitCode;

/// Pupcurve - individual dog weight trajectory prediction
#[derive(Parser)]
#[command(name = "pupcurve")]
#[command(version = "0.1.0")]
#[command(about = "Predict a dog's weight trajectory from breed, sex, age, and current weight")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one prediction request
    Predict(commands::predict::PredictArgs),
    /// List the breeds the model was trained on
    Breeds(commands::breeds::BreedsArgs),
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Predict(args) => commands::predict::predict_command(args).await,
        Commands::Breeds(args) => commands::breeds::breeds_command(args),
    };
    code.into()
}
