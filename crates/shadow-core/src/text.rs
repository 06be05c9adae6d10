//! Line-oriented tokenizer shared by the observable, measurement and
//! subsystem formats.

use std::fs;
use std::path::Path;

use crate::errors::{ErrorInfo, ShadowError};

/// One non-blank line of an input document.
pub(crate) struct Line<'a> {
    /// 1-based line number in the source text.
    pub number: usize,
    pub tokens: Vec<&'a str>,
}

/// Input document split into its qubit-count header and body lines.
pub(crate) struct Document<'a> {
    pub system_size: usize,
    pub lines: Vec<Line<'a>>,
}

pub(crate) fn read_input(path: &Path) -> Result<String, ShadowError> {
    fs::read_to_string(path).map_err(|err| ShadowError::from_io(path, &err))
}

pub(crate) fn split_document<'a>(text: &'a str, kind: &str) -> Result<Document<'a>, ShadowError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, raw)| Line {
            number: idx + 1,
            tokens: raw.split_whitespace().collect(),
        })
        .filter(|line| !line.tokens.is_empty());

    let header = lines.next().ok_or_else(|| {
        ShadowError::Parse(
            ErrorInfo::new("missing-header", "input is empty; expected the qubit count")
                .with_context("kind", kind),
        )
    })?;
    let system_size = match header.tokens.as_slice() {
        [token] => token.parse::<usize>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        ShadowError::Parse(
            ErrorInfo::new(
                "missing-header",
                "first line must hold a single non-negative qubit count",
            )
            .with_context("kind", kind)
            .with_context("line", header.number.to_string()),
        )
    })?;

    Ok(Document {
        system_size,
        lines: lines.collect(),
    })
}

/// Parses a non-negative integer token, reporting `code` on failure.
pub(crate) fn parse_index(token: &str, code: &str, line: usize) -> Result<usize, ShadowError> {
    token.parse::<usize>().map_err(|_| {
        ShadowError::Parse(
            ErrorInfo::new(code, "expected a non-negative integer")
                .with_context("token", token)
                .with_context("line", line.to_string()),
        )
    })
}

/// Attaches the offending line number to a parse error.
pub(crate) fn at_line(err: ShadowError, line: usize) -> ShadowError {
    match err {
        ShadowError::Parse(info) => {
            ShadowError::Parse(info.with_context("line", line.to_string()))
        }
        other => other,
    }
}
