//! Seeded randomness for sampled plans, simulated outcomes and generated
//! observable sets.
//!
//! One `u64` master seed drives a whole run. Each consumer draws from its own
//! [`Stream`], whose seed is SipHash-1-3 of `(master_seed, stream id)` under
//! zero keys, so replaying a run with the same seed reproduces the plan and
//! the outcomes independently of each other.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Consumers of a master seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Bases drawn by the random sampler.
    Plan,
    /// Outcomes drawn by the product-state simulator.
    Outcomes,
    /// Random observable sets.
    Observables,
}

impl Stream {
    /// Substream id hashed together with the master seed.
    pub const fn id(self) -> u64 {
        match self {
            Stream::Plan => 0,
            Stream::Outcomes => 1,
            Stream::Observables => 2,
        }
    }
}

/// `StdRng` seeded from a master seed and a substream id.
#[derive(Debug, Clone)]
pub struct RngHandle(StdRng);

impl RngHandle {
    /// Seeds the generator directly, without substream derivation.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Generator for an arbitrary substream id of `master_seed`.
    pub fn substream(master_seed: u64, id: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, id))
    }

    /// Generator for one of the named consumers of `master_seed`.
    pub fn stream(master_seed: u64, stream: Stream) -> Self {
        Self::substream(master_seed, stream.id())
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Seed of substream `id` of `master_seed`.
pub fn derive_substream_seed(master_seed: u64, id: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(id);
    hasher.finish()
}

/// Master seed drawn from operating system entropy, for runs without `--seed`.
pub fn fresh_master_seed() -> u64 {
    rand::random()
}
