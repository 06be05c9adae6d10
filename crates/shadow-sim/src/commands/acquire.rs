use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args};
use log::debug;
use shadow_acquire::{derandomized_plan, random_plan, MeasurementPlan, SchedulerConfig};
use shadow_core::{ObservableSet, RngHandle, Stream};

use super::{emit, resolve_seed};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").required(true).args(["random", "derandomized"])))]
pub struct AcquireArgs {
    /// Uniformly random bases: COUNT total rounds on ARG qubits.
    #[arg(short = 'r', long)]
    pub random: bool,
    /// Derandomized bases: COUNT measurements per observable listed in file ARG.
    #[arg(short = 'd', long)]
    pub derandomized: bool,
    /// Total rounds (-r) or measurements per observable (-d).
    pub count: usize,
    /// System size (-r) or observable file (-d).
    pub arg: String,
    /// Master seed for the random sampler.
    #[arg(long)]
    pub seed: Option<u64>,
    /// YAML scheduler configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the scheduler learning rate.
    #[arg(long)]
    pub eta: Option<f64>,
    /// Override the scheduler round limit.
    #[arg(long)]
    pub max_rounds: Option<usize>,
    /// Print the plan as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &AcquireArgs) -> Result<(), Box<dyn Error>> {
    let plan = if args.random {
        let system_size: usize = args.arg.parse().map_err(|_| {
            format!(
                "system size must be a non-negative integer, got '{}'",
                args.arg
            )
        })?;
        let seed = resolve_seed(args.seed);
        random_plan(args.count, system_size, &mut RngHandle::stream(seed, Stream::Plan))
    } else {
        let observables = ObservableSet::load(Path::new(&args.arg))?;
        let config = scheduler_config(args)?;
        derandomized_plan(&observables, args.count, config)?
    };
    write_plan(&plan, args.json)
}

fn scheduler_config(args: &AcquireArgs) -> Result<SchedulerConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SchedulerConfig::load(path)?,
        None => SchedulerConfig::default(),
    };
    if let Some(eta) = args.eta {
        config.eta = eta;
    }
    if let Some(max_rounds) = args.max_rounds {
        config.max_rounds = max_rounds;
    }
    config.validate()?;
    debug!("scheduler config: {config:?}");
    Ok(config)
}

fn write_plan(plan: &MeasurementPlan, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let mut text = serde_json::to_string_pretty(plan)?;
        text.push('\n');
        emit(&text)
    } else {
        emit(&plan.to_text())
    }
}
