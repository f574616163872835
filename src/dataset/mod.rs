//! Population Dataset
//!
//! The read-only table every view is derived from. It is loaded once at
//! startup, shared behind an `Arc`, and never mutated afterwards.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_dataset, load_dataset_from_reader, load_dataset_str};
pub use types::{DatasetStats, PopulationDataset, PopulationRecord};
