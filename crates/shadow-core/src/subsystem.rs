//! Qubit subsets whose entanglement entropy is to be predicted.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ShadowError};
use crate::text;

/// Ordered list of distinct qubits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subsystem {
    qubits: Box<[usize]>,
}

impl Subsystem {
    /// Creates a subsystem, rejecting repeated qubits.
    pub fn new(qubits: Vec<usize>) -> Result<Self, ShadowError> {
        let mut seen = BTreeSet::new();
        if let Some(&qubit) = qubits.iter().find(|&&q| !seen.insert(q)) {
            return Err(ShadowError::Parse(
                ErrorInfo::new("duplicate-qubit", "subsystem lists a qubit more than once")
                    .with_context("qubit", qubit.to_string()),
            ));
        }
        Ok(Self {
            qubits: qubits.into_boxed_slice(),
        })
    }

    /// Qubits in declaration order.
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Number of qubits in the subsystem (its m).
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Returns `true` for the empty subsystem.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }
}

/// Subsystems declared against a fixed qubit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemSet {
    system_size: usize,
    subsystems: Vec<Subsystem>,
}

impl SubsystemSet {
    /// Builds the set, rejecting qubits outside the system.
    pub fn new(system_size: usize, subsystems: Vec<Subsystem>) -> Result<Self, ShadowError> {
        for (id, subsystem) in subsystems.iter().enumerate() {
            if let Some(&qubit) = subsystem.qubits().iter().find(|&&q| q >= system_size) {
                return Err(ShadowError::Parse(
                    ErrorInfo::new(
                        "qubit-out-of-range",
                        "subsystem contains a qubit outside the system",
                    )
                    .with_context("subsystem", id.to_string())
                    .with_context("qubit", qubit.to_string())
                    .with_context("system_size", system_size.to_string()),
                ));
            }
        }
        Ok(Self {
            system_size,
            subsystems,
        })
    }

    /// Parses the subsystem text format.
    ///
    /// The first line holds the qubit count. Every following non-blank line is
    /// `m qubit×m`.
    pub fn parse(input: &str) -> Result<Self, ShadowError> {
        let document = text::split_document(input, "subsystems")?;
        let mut subsystems = Vec::with_capacity(document.lines.len());
        for line in &document.lines {
            let size = text::parse_index(line.tokens[0], "malformed-subsystem", line.number)?;
            if line.tokens.len() - 1 != size {
                return Err(ShadowError::Parse(
                    ErrorInfo::new(
                        "malformed-subsystem",
                        "qubit count does not match the declared subsystem size",
                    )
                    .with_context("line", line.number.to_string()),
                ));
            }
            let qubits = line.tokens[1..]
                .iter()
                .map(|token| text::parse_index(token, "malformed-subsystem", line.number))
                .collect::<Result<Vec<_>, _>>()?;
            subsystems.push(Subsystem::new(qubits).map_err(|err| text::at_line(err, line.number))?);
        }
        Self::new(document.system_size, subsystems)
    }

    /// Reads and parses a subsystem file.
    pub fn load(path: &Path) -> Result<Self, ShadowError> {
        let input = text::read_input(path)?;
        Self::parse(&input).map_err(|err| match err {
            ShadowError::Parse(info) => {
                ShadowError::Parse(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Renders the set in the format accepted by [`SubsystemSet::parse`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.system_size);
        for subsystem in &self.subsystems {
            let _ = write!(out, "{}", subsystem.len());
            for qubit in subsystem.qubits() {
                let _ = write!(out, " {qubit}");
            }
            out.push('\n');
        }
        out
    }

    /// Number of qubits in the system.
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// Subsystems in input order.
    pub fn subsystems(&self) -> &[Subsystem] {
        &self.subsystems
    }

    /// Number of subsystems.
    pub fn len(&self) -> usize {
        self.subsystems.len()
    }

    /// Returns `true` when no subsystems were declared.
    pub fn is_empty(&self) -> bool {
        self.subsystems.is_empty()
    }
}
