use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use log::info;
use shadow_acquire::{MeasurementPlan, ProductState};
use shadow_core::{RngHandle, Stream};

use super::{emit, resolve_seed};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Plan file, one line of basis letters per round.
    pub plan: PathBuf,
    /// Comma-separated qubit states: X+ X- Y+ Y- Z+ Z- or I.
    #[arg(long)]
    pub state: String,
    /// Master seed for the simulated outcomes.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &SimulateArgs) -> Result<(), Box<dyn Error>> {
    let state = ProductState::parse(&args.state)?;
    let mut plan = MeasurementPlan::load(&args.plan)?;
    if plan.is_empty() {
        plan = MeasurementPlan::new(state.system_size());
    }
    let seed = resolve_seed(args.seed);
    let record = state.measure(&plan, &mut RngHandle::stream(seed, Stream::Outcomes))?;
    info!("simulated {} rounds on state {state}", record.len());
    emit(&record.to_text())
}
