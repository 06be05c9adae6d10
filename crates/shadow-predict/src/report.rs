//! Serializable prediction output.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::entropy::EntropyEstimate;
use crate::local::ObservableEstimate;

/// Predictions for one measurement record, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionReport {
    /// Expectation values of local observables.
    Observables {
        /// Qubits per measurement round.
        system_size: usize,
        /// Rounds in the measurement record.
        rounds: usize,
        /// One estimate per observable.
        estimates: Vec<ObservableEstimate>,
    },
    /// Rényi-2 entropies of subsystems.
    Entropies {
        /// Qubits per measurement round.
        system_size: usize,
        /// Rounds in the measurement record.
        rounds: usize,
        /// One estimate per subsystem.
        estimates: Vec<EntropyEstimate>,
    },
}

impl PredictionReport {
    /// Predicted values in input order.
    pub fn values(&self) -> Vec<f64> {
        match self {
            PredictionReport::Observables { estimates, .. } => {
                estimates.iter().map(|e| e.value).collect()
            }
            PredictionReport::Entropies { estimates, .. } => {
                estimates.iter().map(|e| e.entropy).collect()
            }
        }
    }

    /// One value per line with six decimals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for value in self.values() {
            let _ = writeln!(out, "{value:.6}");
        }
        out
    }
}
