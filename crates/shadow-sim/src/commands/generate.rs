use std::error::Error;

use clap::{Args, ValueEnum};
use shadow_acquire::{ladder_observables, random_observables};
use shadow_core::{RngHandle, Stream};

use super::{emit, resolve_seed};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Family {
    /// YYXX, XXZZ and XXZ couplings along a chain.
    Ladder,
    /// Uniformly random observables of fixed locality.
    Random,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of qubits.
    #[arg(long)]
    pub system_size: usize,
    /// Observable family to emit.
    #[arg(long, value_enum, default_value_t = Family::Ladder)]
    pub family: Family,
    /// Number of observables for the random family.
    #[arg(long, default_value_t = 20)]
    pub count: usize,
    /// Qubits per observable for the random family.
    #[arg(long, default_value_t = 2)]
    pub locality: usize,
    /// Master seed for the random family.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let observables = match args.family {
        Family::Ladder => ladder_observables(args.system_size)?,
        Family::Random => {
            let seed = resolve_seed(args.seed);
            let mut rng = RngHandle::stream(seed, Stream::Observables);
            random_observables(args.system_size, args.count, args.locality, &mut rng)?
        }
    };
    emit(&observables.to_text())
}
