//! Synthetic observable sets for benchmarking and end-to-end runs.

use rand::seq::index;
use rand::Rng;
use shadow_core::{ErrorInfo, Observable, ObservableSet, Pauli, PauliTerm, ShadowError};

use crate::random::random_basis;

/// Two- and three-body ladder couplings on a chain of `system_size` qubits.
///
/// For every adjacent pair `(i, i+1)` the set contains `Y Y` on the pair times
/// `X X` on every disjoint, non-touching adjacent pair; `X X` on the pair times
/// `Z Z` on every ordered pair of distinct outside qubits; and `X X` on the pair
/// times `Z` on every outside qubit.
pub fn ladder_observables(system_size: usize) -> Result<ObservableSet, ShadowError> {
    let pairs = system_size.saturating_sub(1);
    let outside = |i: usize, j: usize| j != i && j != i + 1;
    let mut observables = Vec::new();

    for i in 0..pairs {
        for j in (0..pairs).filter(|&j| outside(i, j) && j + 1 != i) {
            observables.push(Observable::unweighted(vec![
                PauliTerm::new(i, Pauli::Y),
                PauliTerm::new(i + 1, Pauli::Y),
                PauliTerm::new(j, Pauli::X),
                PauliTerm::new(j + 1, Pauli::X),
            ]));
        }
    }
    for i in 0..pairs {
        for j in (0..system_size).filter(|&j| outside(i, j)) {
            for j2 in (0..system_size).filter(|&j2| outside(i, j2) && j2 != j) {
                observables.push(Observable::unweighted(vec![
                    PauliTerm::new(i, Pauli::X),
                    PauliTerm::new(i + 1, Pauli::X),
                    PauliTerm::new(j, Pauli::Z),
                    PauliTerm::new(j2, Pauli::Z),
                ]));
            }
        }
    }
    for i in 0..pairs {
        for j in (0..system_size).filter(|&j| outside(i, j)) {
            observables.push(Observable::unweighted(vec![
                PauliTerm::new(i, Pauli::X),
                PauliTerm::new(i + 1, Pauli::X),
                PauliTerm::new(j, Pauli::Z),
            ]));
        }
    }
    ObservableSet::new(system_size, observables)
}

/// `count` unit-weight observables, each acting on `locality` distinct random
/// qubits with random bases.
pub fn random_observables<R: Rng + ?Sized>(
    system_size: usize,
    count: usize,
    locality: usize,
    rng: &mut R,
) -> Result<ObservableSet, ShadowError> {
    if locality == 0 || locality > system_size {
        return Err(ShadowError::Config(
            ErrorInfo::new(
                "invalid-locality",
                "locality must lie between one and the system size",
            )
            .with_context("locality", locality.to_string())
            .with_context("system_size", system_size.to_string()),
        ));
    }
    let observables = (0..count)
        .map(|_| {
            let mut qubits = index::sample(&mut *rng, system_size, locality).into_vec();
            qubits.sort_unstable();
            let terms = qubits
                .into_iter()
                .map(|qubit| PauliTerm::new(qubit, random_basis(&mut *rng)))
                .collect();
            Observable::unweighted(terms)
        })
        .collect();
    ObservableSet::new(system_size, observables)
}
