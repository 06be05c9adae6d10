#![deny(missing_docs)]
#![doc = "Measurement planning for classical shadows: the derandomized scheduler, the uniform random sampler, synthetic observable generators and a product-state simulator that turns plans into measurement records."]

pub mod config;
pub mod generators;
pub mod plan;
mod potential;
pub mod random;
pub mod scheduler;
pub mod simulate;

pub use config::SchedulerConfig;
pub use generators::{ladder_observables, random_observables};
pub use plan::{render_setting, MeasurementPlan};
pub use potential::MatchState;
pub use random::{random_basis, random_plan};
pub use scheduler::{derandomized_plan, DerandomizedScheduler};
pub use simulate::{ProductState, QubitState};
