//! Second-order Rényi entropy of qubit subsystems.
//!
//! Every round restricted to an `m`-qubit subsystem contributes one outcome
//! product to each of the `2^m` Pauli strings obtained by keeping or dropping
//! each measured factor. Strings are encoded with two bits per subsystem
//! position (0 for identity, `basis + 1` otherwise), giving `4^m` slots. The
//! purity is estimated from the per-slot outcome sums with the unbiased
//! estimator `(s² - n) / (n (n - 1))`, reweighted per Pauli weight to account
//! for slots with fewer than two samples.

use serde::{Deserialize, Serialize};
use shadow_core::{ErrorInfo, MeasurementRecord, ShadowError, Subsystem, SubsystemSet};

use crate::gray::gray_flips;

/// Largest subsystem accepted by the estimator (`4^13` accumulator slots).
pub const MAX_SUBSYSTEM_SIZE: usize = 13;

const PURITY_CEILING: f64 = 1.0 - 1e-9;

/// Prediction for a single subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyEstimate {
    /// Rényi-2 entropy in bits, within `[0, m]`.
    pub entropy: f64,
    /// Purity estimate after clipping into `[2^-m, 1 - 1e-9]`.
    pub purity: f64,
    /// Rounds that contributed.
    pub rounds: usize,
}

/// Per-encoding outcome sums and sample counts, reused across subsystems.
#[derive(Debug, Default)]
struct PauliMoments {
    size: usize,
    sums: Vec<i64>,
    counts: Vec<u64>,
}

impl PauliMoments {
    fn reset(&mut self, size: usize) {
        let slots = 1usize << (2 * size);
        self.size = size;
        self.sums.clear();
        self.sums.resize(slots, 0);
        self.counts.clear();
        self.counts.resize(slots, 0);
    }

    fn accumulate(&mut self, record: &MeasurementRecord, qubits: &[usize]) {
        for round in record.rounds() {
            let mut encoding = 0usize;
            let mut product = 1i64;
            self.sums[0] += 1;
            self.counts[0] += 1;
            for position in gray_flips(qubits.len()) {
                let measurement = round[qubits[position]];
                product *= measurement.outcome.sign();
                encoding ^= (measurement.basis.index() + 1) << (2 * position);
                self.sums[encoding] += product;
                self.counts[encoding] += 1;
            }
        }
    }

    fn purity(&self) -> f64 {
        let levels = self.size + 1;
        let mut estimable = vec![0u64; levels];
        let mut total = vec![0u64; levels];
        for (encoding, &count) in self.counts.iter().enumerate() {
            let level = pauli_weight(encoding);
            total[level] += 1;
            if count >= 2 {
                estimable[level] += 1;
            }
        }

        let dimension = (1u64 << self.size) as f64;
        let mut purity = 0.0;
        for (encoding, (&sum, &count)) in self.sums.iter().zip(&self.counts).enumerate() {
            if count <= 1 {
                continue;
            }
            let level = pauli_weight(encoding);
            if estimable[level] == 0 {
                continue;
            }
            let (sum, count) = (sum as f64, count as f64);
            let second_moment = (sum * sum - count) / (count * (count - 1.0));
            purity += second_moment / dimension * total[level] as f64 / estimable[level] as f64;
        }
        purity
    }
}

/// Number of non-identity positions in a two-bit-per-qubit encoding.
fn pauli_weight(encoding: usize) -> usize {
    const LOW_BITS: u64 = 0x5555_5555_5555_5555;
    let encoding = encoding as u64;
    ((encoding | (encoding >> 1)) & LOW_BITS).count_ones() as usize
}

/// Reusable estimator that keeps its `4^m` buffers between subsystems.
#[derive(Debug, Default)]
pub struct EntropyEstimator {
    moments: PauliMoments,
}

impl EntropyEstimator {
    /// Creates an estimator with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimates the Rényi-2 entropy of `subsystem` from `record`.
    pub fn estimate(
        &mut self,
        record: &MeasurementRecord,
        subsystem: &Subsystem,
    ) -> Result<EntropyEstimate, ShadowError> {
        let size = subsystem.len();
        if size > MAX_SUBSYSTEM_SIZE {
            return Err(ShadowError::SystemSize(
                ErrorInfo::new("subsystem-too-large", "subsystem exceeds the supported size")
                    .with_context("size", size.to_string())
                    .with_context("max", MAX_SUBSYSTEM_SIZE.to_string()),
            ));
        }
        if let Some(&qubit) = subsystem
            .qubits()
            .iter()
            .find(|&&q| q >= record.system_size())
        {
            return Err(ShadowError::Parse(
                ErrorInfo::new(
                    "qubit-out-of-range",
                    "subsystem contains a qubit outside the system",
                )
                .with_context("qubit", qubit.to_string())
                .with_context("system_size", record.system_size().to_string()),
            ));
        }

        self.moments.reset(size);
        self.moments.accumulate(record, subsystem.qubits());
        let floor = (-(size as f64)).exp2();
        // Not `clamp`: for m = 0 the floor lies above the ceiling.
        let purity = self.moments.purity().max(floor).min(PURITY_CEILING);
        Ok(EntropyEstimate {
            entropy: -purity.log2(),
            purity,
            rounds: record.len(),
        })
    }
}

/// Estimates the Rényi-2 entropy of every subsystem in `subsystems`.
pub fn estimate_entropies(
    record: &MeasurementRecord,
    subsystems: &SubsystemSet,
) -> Result<Vec<EntropyEstimate>, ShadowError> {
    record.ensure_system_size(subsystems.system_size())?;
    let mut estimator = EntropyEstimator::new();
    subsystems
        .subsystems()
        .iter()
        .map(|subsystem| estimator.estimate(record, subsystem))
        .collect()
}
