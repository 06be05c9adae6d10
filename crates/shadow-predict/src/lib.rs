#![deny(missing_docs)]
#![doc = "Predictions from classical shadow measurement records: expectation values of local Pauli observables and second-order Rényi entropies of qubit subsystems."]

pub mod entropy;
pub mod gray;
pub mod local;
pub mod report;

use shadow_core::{MeasurementRecord, ObservableSet, ShadowError, SubsystemSet};

pub use entropy::{estimate_entropies, EntropyEstimate, EntropyEstimator, MAX_SUBSYSTEM_SIZE};
pub use gray::{gray_code, gray_flips, GrayFlips};
pub use local::{estimate_observables, ObservableEstimate};
pub use report::PredictionReport;

/// Builds the report for observable predictions.
pub fn predict_observables(
    record: &MeasurementRecord,
    observables: &ObservableSet,
) -> Result<PredictionReport, ShadowError> {
    Ok(PredictionReport::Observables {
        system_size: record.system_size(),
        rounds: record.len(),
        estimates: estimate_observables(record, observables)?,
    })
}

/// Builds the report for subsystem entropy predictions.
pub fn predict_entropies(
    record: &MeasurementRecord,
    subsystems: &SubsystemSet,
) -> Result<PredictionReport, ShadowError> {
    Ok(PredictionReport::Entropies {
        system_size: record.system_size(),
        rounds: record.len(),
        estimates: estimate_entropies(record, subsystems)?,
    })
}
