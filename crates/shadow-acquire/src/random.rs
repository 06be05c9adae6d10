//! Uniform random measurement settings.

use rand::Rng;
use shadow_core::Pauli;

use crate::plan::MeasurementPlan;

/// Draws `rounds` settings with an independent uniform basis on every qubit.
pub fn random_plan<R: Rng + ?Sized>(
    rounds: usize,
    system_size: usize,
    rng: &mut R,
) -> MeasurementPlan {
    let settings = (0..rounds)
        .map(|_| (0..system_size).map(|_| random_basis(&mut *rng)).collect())
        .collect();
    MeasurementPlan::from_settings_unchecked(system_size, settings)
}

/// Uniform choice among X, Y and Z.
pub fn random_basis<R: Rng + ?Sized>(rng: &mut R) -> Pauli {
    Pauli::ALL[rng.gen_range(0..Pauli::ALL.len())]
}
