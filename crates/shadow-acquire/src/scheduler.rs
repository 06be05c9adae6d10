//! Derandomized measurement scheduling.
//!
//! Each round fixes the qubits one at a time, choosing the basis that most
//! lowers the pessimistic failure bound of the observables whose quota is still
//! open. Rounds are produced until every observable has been fully matched at
//! least `floor(weight * target)` times.

use log::{debug, info};
use shadow_core::{ErrorInfo, ObservableSet, Pauli, ShadowError};

use crate::config::SchedulerConfig;
use crate::plan::MeasurementPlan;
use crate::potential::{MatchState, Potential, ShiftAccumulator};

/// Stateful greedy scheduler over a fixed observable set.
#[derive(Debug)]
pub struct DerandomizedScheduler<'a> {
    observables: &'a ObservableSet,
    config: SchedulerConfig,
    potential: Potential,
    quotas: Vec<usize>,
    matches: Vec<usize>,
    states: Vec<MatchState>,
    accumulator: ShiftAccumulator,
    rounds: usize,
}

impl<'a> DerandomizedScheduler<'a> {
    /// Prepares a scheduler that aims for `target` full matches per unit weight.
    pub fn new(
        observables: &'a ObservableSet,
        target: usize,
        config: SchedulerConfig,
    ) -> Result<Self, ShadowError> {
        config.validate()?;
        debug!(
            "scheduler configured: eta={} max_rounds={} target={} observables={}",
            config.eta,
            config.max_rounds,
            target,
            observables.len()
        );
        let quotas = observables
            .observables()
            .iter()
            .map(|obs| obs.quota(target))
            .collect();
        let states = observables
            .observables()
            .iter()
            .map(|obs| MatchState::Remaining(obs.locality()))
            .collect();
        Ok(Self {
            observables,
            potential: Potential::new(config.eta, observables.max_locality()),
            config,
            quotas,
            matches: vec![0; observables.len()],
            states,
            accumulator: ShiftAccumulator::default(),
            rounds: 0,
        })
    }

    /// Returns `true` once every quota is met.
    pub fn is_complete(&self) -> bool {
        self.satisfied() == self.quotas.len()
    }

    /// Number of observables whose quota is met.
    pub fn satisfied(&self) -> usize {
        self.matches
            .iter()
            .zip(&self.quotas)
            .filter(|(matches, quota)| matches >= quota)
            .count()
    }

    /// Full matches accumulated per observable.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Required full matches per observable.
    pub fn quotas(&self) -> &[usize] {
        &self.quotas
    }

    /// Rounds emitted so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Chooses the next measurement setting, or `None` when the schedule is done.
    pub fn next_round(&mut self) -> Result<Option<Box<[Pauli]>>, ShadowError> {
        if self.is_complete() {
            return Ok(None);
        }
        if self.rounds >= self.config.max_rounds {
            return Err(ShadowError::Schedule(
                ErrorInfo::new(
                    "iteration-cap-exceeded",
                    "quotas were not satisfied within the round limit",
                )
                .with_context("rounds", self.rounds.to_string())
                .with_context("satisfied", self.satisfied().to_string())
                .with_context("observables", self.quotas.len().to_string())
                .with_hint("raise max_rounds or lower the target"),
            ));
        }

        let observables = self.observables;
        let index = observables.index();
        let shift = self.accumulator.take_mean();
        for (state, obs) in self.states.iter_mut().zip(observables.observables()) {
            *state = MatchState::Remaining(obs.locality());
        }

        let mut setting = Vec::with_capacity(observables.system_size());
        for qubit in 0..observables.system_size() {
            let mut best = Pauli::X;
            let mut best_cost = f64::INFINITY;
            for candidate in Pauli::ALL {
                let cost = self.basis_cost(qubit, candidate, shift);
                if cost < best_cost {
                    best_cost = cost;
                    best = candidate;
                }
            }
            for pauli in Pauli::ALL {
                for &obs in index.acting_on(qubit, pauli) {
                    let state = &mut self.states[obs];
                    *state = if pauli == best {
                        state.advance()
                    } else {
                        MatchState::Unreachable
                    };
                }
            }
            setting.push(best);
        }

        for (matches, state) in self.matches.iter_mut().zip(&self.states) {
            if state.is_matched() {
                *matches += 1;
            }
        }
        self.rounds += 1;
        info!(
            "round {}: {}/{} observables satisfied",
            self.rounds,
            self.satisfied(),
            self.quotas.len()
        );
        Ok(Some(setting.into_boxed_slice()))
    }

    /// Change in the summed failure bound if `qubit` were measured in `candidate`.
    fn basis_cost(&mut self, qubit: usize, candidate: Pauli, shift: f64) -> f64 {
        let observables = self.observables;
        let mut cost = 0.0;
        for pauli in Pauli::ALL {
            for &obs in observables.index().acting_on(qubit, pauli) {
                let current = self.states[obs];
                let next = if pauli == candidate {
                    current.advance()
                } else {
                    MatchState::Unreachable
                };
                let (matches, quota) = (self.matches[obs], self.quotas[obs]);
                let weight = observables.observables()[obs].weight();
                let after = self.potential.failure_probability(
                    matches,
                    quota,
                    next,
                    weight,
                    shift,
                    &mut self.accumulator,
                );
                let before = self.potential.failure_probability(
                    matches,
                    quota,
                    current,
                    weight,
                    shift,
                    &mut self.accumulator,
                );
                cost += after - before;
            }
        }
        cost
    }
}

impl Iterator for DerandomizedScheduler<'_> {
    type Item = Result<Box<[Pauli]>, ShadowError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_round().transpose()
    }
}

/// Runs the scheduler to completion and collects the emitted rounds.
pub fn derandomized_plan(
    observables: &ObservableSet,
    target: usize,
    config: SchedulerConfig,
) -> Result<MeasurementPlan, ShadowError> {
    let mut scheduler = DerandomizedScheduler::new(observables, target, config)?;
    let mut plan = MeasurementPlan::new(observables.system_size());
    while let Some(setting) = scheduler.next_round()? {
        plan.push(setting)?;
    }
    info!(
        "derandomized plan complete after {} rounds",
        scheduler.rounds()
    );
    Ok(plan)
}
