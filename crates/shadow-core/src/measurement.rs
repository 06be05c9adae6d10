//! Recorded measurement rounds: one `(basis, outcome)` pair per qubit.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ShadowError};
use crate::pauli::{Outcome, Pauli};
use crate::text;

/// Result of measuring one qubit in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitMeasurement {
    /// Basis the qubit was measured in.
    pub basis: Pauli,
    /// Observed eigenvalue.
    pub outcome: Outcome,
}

impl QubitMeasurement {
    /// Creates a new single-qubit measurement.
    pub const fn new(basis: Pauli, outcome: Outcome) -> Self {
        Self { basis, outcome }
    }
}

/// Append-only store of measurement rounds for a fixed number of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    system_size: usize,
    rounds: Vec<Box<[QubitMeasurement]>>,
}

impl MeasurementRecord {
    /// Creates an empty record.
    pub fn new(system_size: usize) -> Self {
        Self {
            system_size,
            rounds: Vec::new(),
        }
    }

    /// Appends a round, which must cover every qubit exactly once.
    pub fn push_round(&mut self, round: Vec<QubitMeasurement>) -> Result<(), ShadowError> {
        if round.len() != self.system_size {
            return Err(ShadowError::Parse(
                ErrorInfo::new(
                    "malformed-measurement",
                    "measurement round does not cover every qubit",
                )
                .with_context("expected", self.system_size.to_string())
                .with_context("found", round.len().to_string()),
            ));
        }
        self.rounds.push(round.into_boxed_slice());
        Ok(())
    }

    /// Parses the measurement text format.
    ///
    /// The first line holds the qubit count. Every following non-blank line is
    /// `(basis outcome)×qubit_count`.
    pub fn parse(input: &str) -> Result<Self, ShadowError> {
        let document = text::split_document(input, "measurements")?;
        let mut record = Self::new(document.system_size);
        record.rounds.reserve(document.lines.len());
        for line in &document.lines {
            if line.tokens.len() != 2 * record.system_size {
                return Err(ShadowError::Parse(
                    ErrorInfo::new(
                        "malformed-measurement",
                        "expected one basis and one outcome per qubit",
                    )
                    .with_context("line", line.number.to_string())
                    .with_context("system_size", record.system_size.to_string()),
                ));
            }
            let round = line
                .tokens
                .chunks_exact(2)
                .map(|pair| {
                    let basis = pair[0].parse::<Pauli>()?;
                    let outcome = pair[1].parse::<Outcome>()?;
                    Ok(QubitMeasurement::new(basis, outcome))
                })
                .collect::<Result<Vec<_>, ShadowError>>()
                .map_err(|err| text::at_line(err, line.number))?;
            record.rounds.push(round.into_boxed_slice());
        }
        Ok(record)
    }

    /// Reads and parses a measurement file.
    pub fn load(path: &Path) -> Result<Self, ShadowError> {
        let input = text::read_input(path)?;
        Self::parse(&input).map_err(|err| match err {
            ShadowError::Parse(info) => {
                ShadowError::Parse(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Renders the record in the format accepted by [`MeasurementRecord::parse`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.system_size);
        for round in &self.rounds {
            let mut first = true;
            for measurement in round.iter() {
                if !first {
                    out.push(' ');
                }
                first = false;
                let _ = write!(out, "{} {}", measurement.basis, measurement.outcome);
            }
            out.push('\n');
        }
        out
    }

    /// Fails with `system-size-mismatch` unless the record covers `expected` qubits.
    pub fn ensure_system_size(&self, expected: usize) -> Result<(), ShadowError> {
        if self.system_size != expected {
            return Err(ShadowError::system_size_mismatch(expected, self.system_size));
        }
        Ok(())
    }

    /// Number of qubits per round.
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// All recorded rounds in acquisition order.
    pub fn rounds(&self) -> &[Box<[QubitMeasurement]>] {
        &self.rounds
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns `true` when no rounds have been recorded.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
