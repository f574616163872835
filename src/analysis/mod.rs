//! Population Analysis
//!
//! The pure computations behind the dashboard:
//!
//! - **difference**: year-over-year deltas ranked by growth
//! - **format**: compact `"1.2 M"` / `"340 K"` strings
//! - **error**: error types
//!
//! Nothing in this module logs, caches, or touches I/O.
//!
//! # Example
//!
//! ```rust
//! use popdash::analysis::{compute_ranked_differences, format_compact};
//! use popdash::dataset::{PopulationDataset, PopulationRecord};
//!
//! let dataset = PopulationDataset::new(vec![
//!     PopulationRecord::new("A", "AA", 2019, 1_200_000),
//!     PopulationRecord::new("A", "AA", 2018, 1_000_000),
//!     PopulationRecord::new("B", "BB", 2019, 500_000),
//!     PopulationRecord::new("B", "BB", 2018, 600_000),
//! ])?;
//!
//! let ranked = compute_ranked_differences(&dataset, 2019)?;
//! assert_eq!(ranked[0].region, "A");
//! assert_eq!(format_compact(ranked[0].population_delta), "200 K");
//! assert_eq!(format_compact(ranked[1].population_delta), "-100 K");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod difference;
pub mod error;
pub mod format;

pub use difference::{compute_ranked_differences, RankedDifference};
pub use error::{AnalysisError, AnalysisResult};
pub use format::{format_compact, format_population};
