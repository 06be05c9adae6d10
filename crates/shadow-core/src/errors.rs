//! Structured error types shared across the shadow crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ShadowError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, line numbers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for shadow planning and prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ShadowError {
    /// Input files that cannot be opened or read.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Malformed observable, measurement, subsystem or plan text.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Qubit counts that disagree between inputs or exceed supported limits.
    #[error("system size error: {0}")]
    SystemSize(ErrorInfo),
    /// Measurement scheduling failures.
    #[error("schedule error: {0}")]
    Schedule(ErrorInfo),
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ShadowError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ShadowError::Io(info)
            | ShadowError::Parse(info)
            | ShadowError::SystemSize(info)
            | ShadowError::Schedule(info)
            | ShadowError::Config(info) => info,
        }
    }

    /// Maps an I/O failure on `path` into the `Io` family.
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        let info = if err.kind() == std::io::ErrorKind::NotFound {
            ErrorInfo::new(
                "file-not-found",
                format!("the input file \"{}\" does not exist", path.display()),
            )
        } else {
            ErrorInfo::new("read-failed", err.to_string())
        };
        ShadowError::Io(info.with_context("path", path.display().to_string()))
    }

    /// Reports two inputs that disagree on the number of qubits.
    pub fn system_size_mismatch(expected: usize, found: usize) -> Self {
        ShadowError::SystemSize(
            ErrorInfo::new("system-size-mismatch", "the system sizes do not match")
                .with_context("expected", expected.to_string())
                .with_context("found", found.to_string()),
        )
    }
}
