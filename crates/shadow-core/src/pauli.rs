//! Single-qubit Pauli measurement bases and ±1 outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ShadowError};

/// One of the three single-qubit Pauli measurement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// σ<sub>x</sub>
    X,
    /// σ<sub>y</sub>
    Y,
    /// σ<sub>z</sub>
    Z,
}

impl Pauli {
    /// All bases in tie-breaking order.
    pub const ALL: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Position of the basis in [`Pauli::ALL`] (X → 0, Y → 1, Z → 2).
    pub const fn index(self) -> usize {
        match self {
            Pauli::X => 0,
            Pauli::Y => 1,
            Pauli::Z => 2,
        }
    }

    /// Inverse of [`Pauli::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Letter used by the text formats.
    pub const fn as_char(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Pauli {
    type Err = ShadowError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "X" => Ok(Pauli::X),
            "Y" => Ok(Pauli::Y),
            "Z" => Ok(Pauli::Z),
            _ => Err(ShadowError::Parse(
                ErrorInfo::new("invalid-basis", "basis token must be one of X, Y or Z")
                    .with_context("token", token),
            )),
        }
    }
}

/// Eigenvalue observed when measuring a qubit in a Pauli basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// +1 eigenvalue.
    Plus,
    /// −1 eigenvalue.
    Minus,
}

impl Outcome {
    /// Returns the outcome as a signed integer.
    pub const fn sign(self) -> i64 {
        match self {
            Outcome::Plus => 1,
            Outcome::Minus => -1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Plus => "1",
            Outcome::Minus => "-1",
        })
    }
}

impl FromStr for Outcome {
    type Err = ShadowError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1" | "+1" => Ok(Outcome::Plus),
            "-1" => Ok(Outcome::Minus),
            _ => Err(ShadowError::Parse(
                ErrorInfo::new("invalid-outcome", "measurement outcome must be +1 or -1")
                    .with_context("token", token),
            )),
        }
    }
}
