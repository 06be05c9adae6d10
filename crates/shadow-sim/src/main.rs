use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    acquire::{self, AcquireArgs},
    generate::{self, GenerateArgs},
    predict::{self, PredictArgs},
    simulate::{self, SimulateArgs},
};
use log::error;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "shadow-sim",
    about = "Classical shadow measurement planning and prediction"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit a random or derandomized measurement plan.
    Acquire(AcquireArgs),
    /// Predict observables or subsystem entropies from measurement outcomes.
    Predict(PredictArgs),
    /// Write a synthetic observable file.
    Generate(GenerateArgs),
    /// Measure a product state according to a plan.
    Simulate(SimulateArgs),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Acquire(args) => acquire::run(&args),
        Command::Predict(args) => predict::run(&args),
        Command::Generate(args) => generate::run(&args),
        Command::Simulate(args) => simulate::run(&args),
    }
}
