#![deny(missing_docs)]
#![doc = "Shared data model for classical shadow measurement planning and prediction: Pauli bases, weighted local observables with their inverted index, recorded measurement rounds and entropy subsystems."]

pub mod errors;
pub mod measurement;
pub mod observable;
pub mod pauli;
pub mod rng;
pub mod subsystem;
mod text;

pub use errors::{ErrorInfo, ShadowError};
pub use measurement::{MeasurementRecord, QubitMeasurement};
pub use observable::{Observable, ObservableSet, PauliIndex, PauliTerm};
pub use pauli::{Outcome, Pauli};
pub use rng::{derive_substream_seed, fresh_master_seed, RngHandle, Stream};
pub use subsystem::{Subsystem, SubsystemSet};
