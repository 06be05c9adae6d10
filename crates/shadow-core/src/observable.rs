//! Weighted k-local Pauli observables and the per-qubit inverted index.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ShadowError};
use crate::pauli::Pauli;
use crate::text;

/// A single `(qubit, basis)` factor of a Pauli observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Qubit the factor acts on.
    pub qubit: usize,
    /// Pauli operator applied on that qubit.
    pub pauli: Pauli,
}

impl PauliTerm {
    /// Creates a new factor.
    pub const fn new(qubit: usize, pauli: Pauli) -> Self {
        Self { qubit, pauli }
    }
}

/// Product of single-qubit Pauli operators with a positive weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observable {
    terms: Box<[PauliTerm]>,
    weight: f64,
}

impl Observable {
    /// Creates an observable, rejecting weights that are not finite and positive.
    pub fn new(terms: Vec<PauliTerm>, weight: f64) -> Result<Self, ShadowError> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(ShadowError::Parse(
                ErrorInfo::new("invalid-weight", "observable weight must be finite and positive")
                    .with_context("weight", weight.to_string()),
            ));
        }
        Ok(Self {
            terms: terms.into_boxed_slice(),
            weight,
        })
    }

    /// Creates an observable with the default weight of 1.0.
    pub fn unweighted(terms: Vec<PauliTerm>) -> Self {
        Self {
            terms: terms.into_boxed_slice(),
            weight: 1.0,
        }
    }

    /// Returns the Pauli factors in declaration order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of qubits the observable acts on (its k).
    pub fn locality(&self) -> usize {
        self.terms.len()
    }

    /// Relative importance used to scale the measurement quota.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of full matches required when every observable targets `target`.
    pub fn quota(&self, target: usize) -> usize {
        (self.weight * target as f64).floor() as usize
    }
}

/// Lookup from `(qubit, basis)` to the observables applying that basis there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PauliIndex {
    buckets: Vec<[Vec<usize>; 3]>,
}

impl PauliIndex {
    fn build(system_size: usize, observables: &[Observable]) -> Self {
        let mut buckets = vec![[Vec::new(), Vec::new(), Vec::new()]; system_size];
        for (id, observable) in observables.iter().enumerate() {
            for term in observable.terms() {
                buckets[term.qubit][term.pauli.index()].push(id);
            }
        }
        Self { buckets }
    }

    /// Ids of the observables that apply `pauli` on `qubit`, in ascending order.
    pub fn acting_on(&self, qubit: usize, pauli: Pauli) -> &[usize] {
        self.buckets
            .get(qubit)
            .map(|bucket| bucket[pauli.index()].as_slice())
            .unwrap_or(&[])
    }

    /// Number of qubits covered by the index.
    pub fn num_qubits(&self) -> usize {
        self.buckets.len()
    }
}

/// Immutable collection of observables over a fixed number of qubits.
#[derive(Debug, Clone)]
pub struct ObservableSet {
    system_size: usize,
    observables: Vec<Observable>,
    index: PauliIndex,
    max_locality: usize,
}

impl ObservableSet {
    /// Builds the set and its inverted index.
    pub fn new(system_size: usize, observables: Vec<Observable>) -> Result<Self, ShadowError> {
        for (id, observable) in observables.iter().enumerate() {
            if let Some(term) = observable.terms().iter().find(|t| t.qubit >= system_size) {
                return Err(ShadowError::Parse(
                    ErrorInfo::new(
                        "qubit-out-of-range",
                        "observable acts on a qubit outside the system",
                    )
                    .with_context("observable", id.to_string())
                    .with_context("qubit", term.qubit.to_string())
                    .with_context("system_size", system_size.to_string()),
                ));
            }
        }
        let index = PauliIndex::build(system_size, &observables);
        let max_locality = observables
            .iter()
            .map(Observable::locality)
            .max()
            .unwrap_or(0);
        Ok(Self {
            system_size,
            observables,
            index,
            max_locality,
        })
    }

    /// Parses the observable text format.
    ///
    /// The first line holds the qubit count. Every following non-blank line is
    /// `k (basis qubit)×k [weight]`.
    pub fn parse(input: &str) -> Result<Self, ShadowError> {
        let document = text::split_document(input, "observables")?;
        let mut observables = Vec::with_capacity(document.lines.len());
        for line in &document.lines {
            observables.push(parse_observable(&line.tokens, line.number)?);
        }
        Self::new(document.system_size, observables)
    }

    /// Reads and parses an observable file.
    pub fn load(path: &Path) -> Result<Self, ShadowError> {
        let input = text::read_input(path)?;
        Self::parse(&input).map_err(|err| match err {
            ShadowError::Parse(info) => {
                ShadowError::Parse(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Renders the set in the format accepted by [`ObservableSet::parse`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.system_size);
        for observable in &self.observables {
            let _ = write!(out, "{}", observable.locality());
            for term in observable.terms() {
                let _ = write!(out, " {} {}", term.pauli, term.qubit);
            }
            if observable.weight() != 1.0 {
                let _ = write!(out, " {}", observable.weight());
            }
            out.push('\n');
        }
        out
    }

    /// Number of qubits in the system.
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// Largest k over all observables.
    pub fn max_locality(&self) -> usize {
        self.max_locality
    }

    /// Observables in input order.
    pub fn observables(&self) -> &[Observable] {
        &self.observables
    }

    /// Number of observables.
    pub fn len(&self) -> usize {
        self.observables.len()
    }

    /// Returns `true` when the set holds no observables.
    pub fn is_empty(&self) -> bool {
        self.observables.is_empty()
    }

    /// Inverted `(qubit, basis)` index.
    pub fn index(&self) -> &PauliIndex {
        &self.index
    }
}

fn parse_observable(tokens: &[&str], line: usize) -> Result<Observable, ShadowError> {
    let malformed = |message: &str| {
        ShadowError::Parse(
            ErrorInfo::new("malformed-observable", message)
                .with_context("line", line.to_string())
                .with_hint("expected `k (basis qubit)×k [weight]`"),
        )
    };

    let locality = tokens[0]
        .parse::<usize>()
        .map_err(|_| malformed("locality must be a non-negative integer"))?;
    let body = &tokens[1..];
    let pairs = locality
        .checked_mul(2)
        .filter(|&needed| body.len() == needed || body.len() == needed + 1)
        .ok_or_else(|| malformed("token count does not match the declared locality"))?;

    let mut terms = Vec::with_capacity(locality);
    for pair in body[..pairs].chunks_exact(2) {
        let pauli = pair[0].parse::<Pauli>().map_err(|_| {
            ShadowError::Parse(
                ErrorInfo::new("malformed-observable", "basis token must be one of X, Y or Z")
                    .with_context("line", line.to_string())
                    .with_context("token", pair[0]),
            )
        })?;
        let qubit = text::parse_index(pair[1], "malformed-observable", line)?;
        terms.push(PauliTerm::new(qubit, pauli));
    }

    match body.get(pairs) {
        None => Ok(Observable::unweighted(terms)),
        Some(token) => {
            let weight = token
                .parse::<f64>()
                .map_err(|_| malformed("weight must be a real number"))?;
            Observable::new(terms, weight).map_err(|err| text::at_line(err, line))
        }
    }
}
