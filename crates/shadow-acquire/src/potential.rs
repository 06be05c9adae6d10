//! Multiplicative-weight pessimistic estimator behind the derandomized
//! scheduler.
//!
//! For an observable that has been fully matched `m` times and still needs
//! `r` factors in the current round, the log-potential is
//! `-(eta/2)·m + ln(1 + (e^(-eta/2) - 1) / 3^r)`. Dividing by the observable
//! weight and exponentiating bounds its contribution to the failure
//! probability. Exponents are re-centred by the mean log-potential of the
//! previous round so that long schedules do not underflow.

/// Progress of one observable within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// This many factors must still be measured in their own basis.
    Remaining(usize),
    /// A factor was measured in a different basis; no match is possible this round.
    Unreachable,
}

impl MatchState {
    /// State after one more factor is measured in its own basis.
    pub fn advance(self) -> Self {
        match self {
            MatchState::Remaining(left) => MatchState::Remaining(left.saturating_sub(1)),
            MatchState::Unreachable => MatchState::Unreachable,
        }
    }

    /// Returns `true` once every factor has been matched.
    pub fn is_matched(self) -> bool {
        self == MatchState::Remaining(0)
    }
}

/// Running mean of the scaled log-potentials evaluated during one round.
#[derive(Debug, Clone, Default)]
pub(crate) struct ShiftAccumulator {
    sum: f64,
    count: usize,
}

impl ShiftAccumulator {
    fn record(&mut self, scaled_log_value: f64) {
        self.sum += scaled_log_value;
        self.count += 1;
    }

    /// Returns the mean collected so far (0 when empty) and starts a new round.
    pub(crate) fn take_mean(&mut self) -> f64 {
        let mean = if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        };
        *self = Self::default();
        mean
    }
}

/// Precomputed pessimistic estimator for a fixed learning rate.
#[derive(Debug, Clone)]
pub(crate) struct Potential {
    eta: f64,
    expm1_half_eta: f64,
    log_terms: Vec<f64>,
}

impl Potential {
    pub(crate) fn new(eta: f64, max_locality: usize) -> Self {
        let expm1_half_eta = (-eta / 2.0).exp_m1();
        let log_terms = (0..=max_locality)
            .map(|remaining| log_term(expm1_half_eta, remaining))
            .collect();
        Self {
            eta,
            expm1_half_eta,
            log_terms,
        }
    }

    fn log_term_for(&self, state: MatchState) -> f64 {
        match state {
            MatchState::Remaining(left) => self
                .log_terms
                .get(left)
                .copied()
                .unwrap_or_else(|| log_term(self.expm1_half_eta, left)),
            MatchState::Unreachable => 0.0,
        }
    }

    /// Failure-probability bound for one observable, or 0 once its quota is met.
    pub(crate) fn failure_probability(
        &self,
        matches: usize,
        quota: usize,
        state: MatchState,
        weight: f64,
        shift: f64,
        accumulator: &mut ShiftAccumulator,
    ) -> f64 {
        if quota <= matches {
            return 0.0;
        }
        let log_value = -self.eta / 2.0 * matches as f64 + self.log_term_for(state);
        let scaled = log_value / weight;
        accumulator.record(scaled);
        2.0 * (scaled - shift).exp()
    }
}

/// `ln(1 + (e^(-eta/2) - 1) / 3^remaining)`
fn log_term(expm1_half_eta: f64, remaining: usize) -> f64 {
    let exponent = i32::try_from(remaining).unwrap_or(i32::MAX);
    ((1.0f64 / 3.0).powi(exponent) * expm1_half_eta).ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_saturates_and_keeps_unreachable() {
        assert_eq!(MatchState::Remaining(2).advance(), MatchState::Remaining(1));
        assert_eq!(MatchState::Remaining(0).advance(), MatchState::Remaining(0));
        assert_eq!(MatchState::Unreachable.advance(), MatchState::Unreachable);
        assert!(MatchState::Remaining(1).advance().is_matched());
        assert!(!MatchState::Unreachable.is_matched());
    }

    #[test]
    fn log_terms_match_closed_form() {
        let potential = Potential::new(0.9, 3);
        assert!((potential.log_terms[0] - (-0.45)).abs() < 1e-12);
        let expected = (1.0 + ((-0.45f64).exp() - 1.0) / 9.0).ln();
        assert!((potential.log_terms[2] - expected).abs() < 1e-12);
        // Terms grow towards zero as more factors remain unmatched.
        assert!(potential.log_terms.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(potential.log_term_for(MatchState::Unreachable), 0.0);
    }

    #[test]
    fn satisfied_observables_contribute_nothing() {
        let potential = Potential::new(0.9, 2);
        let mut acc = ShiftAccumulator::default();
        let value =
            potential.failure_probability(3, 3, MatchState::Remaining(1), 1.0, 0.0, &mut acc);
        assert_eq!(value, 0.0);
        assert_eq!(acc.take_mean(), 0.0);
    }

    #[test]
    fn shift_recentres_and_accumulates_scaled_values() {
        let potential = Potential::new(0.9, 2);
        let mut acc = ShiftAccumulator::default();
        let unshifted =
            potential.failure_probability(2, 5, MatchState::Unreachable, 2.0, 0.0, &mut acc);
        assert!((unshifted - 2.0 * (-0.45f64).exp()).abs() < 1e-12);
        let shifted =
            potential.failure_probability(2, 5, MatchState::Unreachable, 2.0, -0.45, &mut acc);
        assert!((shifted - 2.0).abs() < 1e-12);
        assert!((acc.take_mean() - (-0.45)).abs() < 1e-12);
        assert_eq!(acc.take_mean(), 0.0);
    }
}
