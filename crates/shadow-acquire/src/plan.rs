//! Measurement plans: one basis setting per round.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shadow_core::{ErrorInfo, Pauli, ShadowError};

/// Ordered list of measurement settings, one basis per qubit per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementPlan {
    system_size: usize,
    settings: Vec<Box<[Pauli]>>,
}

impl MeasurementPlan {
    /// Creates an empty plan.
    pub fn new(system_size: usize) -> Self {
        Self {
            system_size,
            settings: Vec::new(),
        }
    }

    pub(crate) fn from_settings_unchecked(system_size: usize, settings: Vec<Box<[Pauli]>>) -> Self {
        Self {
            system_size,
            settings,
        }
    }

    /// Appends one round; its width must equal the system size.
    pub fn push(&mut self, setting: Box<[Pauli]>) -> Result<(), ShadowError> {
        if setting.len() != self.system_size {
            return Err(ShadowError::Parse(
                ErrorInfo::new(
                    "malformed-plan",
                    "measurement setting width differs from system size",
                )
                .with_context("expected", self.system_size.to_string())
                .with_context("found", setting.len().to_string()),
            ));
        }
        self.settings.push(setting);
        Ok(())
    }

    /// Parses a plan as printed by [`MeasurementPlan::to_text`].
    ///
    /// Plans carry no header; the width of the first round fixes the system size.
    pub fn parse(input: &str) -> Result<Self, ShadowError> {
        let mut plan: Option<Self> = None;
        for (idx, raw) in input.lines().enumerate() {
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            let setting = tokens
                .iter()
                .map(|token| token.parse::<Pauli>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| match err {
                    ShadowError::Parse(info) => {
                        ShadowError::Parse(info.with_context("line", (idx + 1).to_string()))
                    }
                    other => other,
                })?;
            let plan = plan.get_or_insert_with(|| Self::new(setting.len()));
            plan.push(setting.into_boxed_slice()).map_err(|err| match err {
                ShadowError::Parse(info) => {
                    ShadowError::Parse(info.with_context("line", (idx + 1).to_string()))
                }
                other => other,
            })?;
        }
        Ok(plan.unwrap_or_else(|| Self::new(0)))
    }

    /// Reads and parses a plan file.
    pub fn load(path: &Path) -> Result<Self, ShadowError> {
        let input = fs::read_to_string(path).map_err(|err| ShadowError::from_io(path, &err))?;
        Self::parse(&input)
    }

    /// One line per round with space-separated basis letters.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.settings.len() * (2 * self.system_size + 1));
        for setting in &self.settings {
            out.push_str(&render_setting(setting));
            out.push('\n');
        }
        out
    }

    /// Number of qubits per round.
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// Settings in measurement order.
    pub fn settings(&self) -> &[Box<[Pauli]>] {
        &self.settings
    }

    /// Number of rounds.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Returns `true` when the plan holds no rounds.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Renders a single round as space-separated basis letters.
pub fn render_setting(setting: &[Pauli]) -> String {
    let mut line = String::with_capacity(2 * setting.len());
    for (idx, pauli) in setting.iter().enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{pauli}");
    }
    line
}
