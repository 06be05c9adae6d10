use std::error::Error;
use std::path::PathBuf;

use clap::{ArgGroup, Args};
use shadow_core::{MeasurementRecord, ObservableSet, SubsystemSet};
use shadow_predict::{predict_entropies, predict_observables};

use super::emit;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").required(true).args(["observables", "entropy"])))]
pub struct PredictArgs {
    /// Predict the expectation value of every observable in TARGET.
    #[arg(short = 'o', long)]
    pub observables: bool,
    /// Predict the Rényi-2 entropy of every subsystem in TARGET.
    #[arg(short = 'e', long)]
    pub entropy: bool,
    /// Measurement file.
    pub measurements: PathBuf,
    /// Observable file (-o) or subsystem file (-e).
    pub target: PathBuf,
    /// Print a JSON report instead of one value per line.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &PredictArgs) -> Result<(), Box<dyn Error>> {
    let record = MeasurementRecord::load(&args.measurements)?;
    let report = if args.observables {
        let observables = ObservableSet::load(&args.target)?;
        predict_observables(&record, &observables)?
    } else {
        let subsystems = SubsystemSet::load(&args.target)?;
        predict_entropies(&record, &subsystems)?
    };
    if args.json {
        let mut text = serde_json::to_string_pretty(&report)?;
        text.push('\n');
        emit(&text)
    } else {
        emit(&report.to_text())
    }
}
