//! Virtual product states that produce measurement records for a plan.
//!
//! Every qubit is either an eigenstate of one Pauli axis or maximally mixed,
//! so both the outcome distribution and the exact observable values are known
//! in closed form.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use shadow_core::{
    ErrorInfo, MeasurementRecord, Observable, Outcome, Pauli, QubitMeasurement, ShadowError,
    Subsystem,
};

use crate::plan::MeasurementPlan;

/// Single-qubit factor of a [`ProductState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QubitState {
    /// Eigenstate of `axis` with eigenvalue `sign`.
    Eigen {
        /// Axis the qubit is polarized along.
        axis: Pauli,
        /// Eigenvalue returned when measured along `axis`.
        sign: Outcome,
    },
    /// Maximally mixed qubit.
    Mixed,
}

impl QubitState {
    fn measure<R: Rng + ?Sized>(self, basis: Pauli, rng: &mut R) -> Outcome {
        match self {
            QubitState::Eigen { axis, sign } if axis == basis => sign,
            _ => {
                if rng.gen_bool(0.5) {
                    Outcome::Plus
                } else {
                    Outcome::Minus
                }
            }
        }
    }
}

impl FromStr for QubitState {
    type Err = ShadowError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ShadowError::Parse(
                ErrorInfo::new("invalid-state", "qubit state must be I or an axis with a sign")
                    .with_context("token", token)
                    .with_hint("use one of X+ X- Y+ Y- Z+ Z- I"),
            )
        };
        if token == "I" {
            return Ok(QubitState::Mixed);
        }
        let mut chars = token.chars();
        let axis = match chars.next() {
            Some('X') => Pauli::X,
            Some('Y') => Pauli::Y,
            Some('Z') => Pauli::Z,
            _ => return Err(invalid()),
        };
        let sign = match chars.as_str() {
            "+" => Outcome::Plus,
            "-" => Outcome::Minus,
            _ => return Err(invalid()),
        };
        Ok(QubitState::Eigen { axis, sign })
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitState::Eigen { axis, sign } => {
                let sign = match sign {
                    Outcome::Plus => '+',
                    Outcome::Minus => '-',
                };
                write!(f, "{axis}{sign}")
            }
            QubitState::Mixed => f.write_str("I"),
        }
    }
}

/// Tensor product of independent single-qubit states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductState {
    qubits: Vec<QubitState>,
}

impl ProductState {
    /// Wraps the given per-qubit states.
    pub fn new(qubits: Vec<QubitState>) -> Self {
        Self { qubits }
    }

    /// Parses a comma-separated list such as `Z+,X-,I`.
    pub fn parse(spec: &str) -> Result<Self, ShadowError> {
        let qubits = spec
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(qubit, token)| {
                token.parse::<QubitState>().map_err(|err| match err {
                    ShadowError::Parse(info) => {
                        ShadowError::Parse(info.with_context("qubit", qubit.to_string()))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(qubits))
    }

    /// Number of qubits.
    pub fn system_size(&self) -> usize {
        self.qubits.len()
    }

    /// Per-qubit states.
    pub fn qubits(&self) -> &[QubitState] {
        &self.qubits
    }

    /// Samples one outcome per qubit for every round of `plan`.
    pub fn measure<R: Rng + ?Sized>(
        &self,
        plan: &MeasurementPlan,
        rng: &mut R,
    ) -> Result<MeasurementRecord, ShadowError> {
        if plan.system_size() != self.system_size() {
            return Err(ShadowError::system_size_mismatch(
                self.system_size(),
                plan.system_size(),
            ));
        }
        let mut record = MeasurementRecord::new(self.system_size());
        for setting in plan.settings() {
            let round = setting
                .iter()
                .zip(&self.qubits)
                .map(|(&basis, state)| {
                    QubitMeasurement::new(basis, state.measure(basis, &mut *rng))
                })
                .collect();
            record.push_round(round)?;
        }
        Ok(record)
    }

    /// Exact expectation value of `observable` (its weight is not applied).
    pub fn expectation(&self, observable: &Observable) -> f64 {
        observable
            .terms()
            .iter()
            .map(|term| match self.qubits.get(term.qubit) {
                Some(QubitState::Eigen { axis, sign }) if *axis == term.pauli => sign.sign() as f64,
                _ => 0.0,
            })
            .product()
    }

    /// Exact second-order Rényi entropy of `subsystem` in bits.
    pub fn renyi2_entropy(&self, subsystem: &Subsystem) -> f64 {
        subsystem
            .qubits()
            .iter()
            .filter(|&&qubit| matches!(self.qubits.get(qubit), Some(QubitState::Mixed)))
            .count() as f64
    }
}

impl fmt::Display for ProductState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, qubit) in self.qubits.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{qubit}")?;
        }
        Ok(())
    }
}
