//! Expectation values of local Pauli observables from measurement rounds.

use log::warn;
use serde::{Deserialize, Serialize};
use shadow_core::{MeasurementRecord, ObservableSet, ShadowError};

/// Prediction for a single observable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservableEstimate {
    /// Mean of the outcome products over fully matching rounds, or 0 if none matched.
    pub value: f64,
    /// Rounds whose bases agreed with the observable on every qubit it acts on.
    pub matches: usize,
}

/// Estimates every observable in `observables` from `record`.
///
/// A round contributes to an observable only when every factor was measured in
/// its own basis; the contribution is the product of the outcomes on those
/// qubits. Observables with no contributing round are reported as 0 and logged
/// at warn level.
pub fn estimate_observables(
    record: &MeasurementRecord,
    observables: &ObservableSet,
) -> Result<Vec<ObservableEstimate>, ShadowError> {
    record.ensure_system_size(observables.system_size())?;
    let index = observables.index();
    let count = observables.len();

    let mut remaining = vec![0usize; count];
    let mut product = vec![1i64; count];
    let mut sums = vec![0i64; count];
    let mut matches = vec![0usize; count];

    for round in record.rounds() {
        for (slot, observable) in remaining.iter_mut().zip(observables.observables()) {
            *slot = observable.locality();
        }
        product.fill(1);
        for (qubit, measurement) in round.iter().enumerate() {
            for &obs in index.acting_on(qubit, measurement.basis) {
                remaining[obs] -= 1;
                product[obs] *= measurement.outcome.sign();
            }
        }
        let finished = remaining.iter().zip(&product);
        for ((&left, &value), (sum, hits)) in finished.zip(sums.iter_mut().zip(&mut matches)) {
            if left == 0 {
                *sum += value;
                *hits += 1;
            }
        }
    }

    Ok(sums
        .into_iter()
        .zip(matches)
        .enumerate()
        .map(|(obs, (sum, matches))| {
            if matches == 0 {
                warn!("observable {} was not measured in any round", obs + 1);
                ObservableEstimate {
                    value: 0.0,
                    matches,
                }
            } else {
                ObservableEstimate {
                    value: sum as f64 / matches as f64,
                    matches,
                }
            }
        })
        .collect())
}
