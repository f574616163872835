//! # Popdash
//!
//! US Population Dashboard - year-over-year population changes, choropleth,
//! ranking and heatmap data for U.S. states.
//!
//! ## Features
//!
//! - **Ranked differences**: regions ordered by growth against the previous year
//! - **Compact numbers**: `"39.5 M"` / `"578 K"` display strings
//! - **Dashboard panels**: growth metrics, map, ranked table, heatmap
//! - **REST API**: JSON views for any front-end
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable population table
//! - [`analysis`]: Difference calculator and number formatter
//! - [`dashboard`]: Panel view-models and selection handling
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use popdash::analysis::{compute_ranked_differences, format_compact};
//! use popdash::dataset::load_dataset;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_dataset(Path::new("data/us-population-2010-2019-reshaped.csv"))?;
//!
//!     let ranked = compute_ranked_differences(&dataset, 2019)?;
//!     if let (Some(top), Some(bottom)) = (ranked.first(), ranked.last()) {
//!         println!("Highest growth: {} ({})", top.region, format_compact(top.population_delta));
//!         println!("Lowest growth: {} ({})", bottom.region, format_compact(bottom.population_delta));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod logging;

// Re-export top-level types for convenience
pub use analysis::{
    compute_ranked_differences, format_compact, format_population, AnalysisError,
    AnalysisResult, RankedDifference,
};

pub use dataset::{
    load_dataset, DatasetError, DatasetResult, DatasetStats, PopulationDataset, PopulationRecord,
};

pub use dashboard::{ChangesPanel, ColorTheme, DashboardView, Selection};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, Config, ConfigError, DashboardConfig, DataConfig, LoggingConfig,
};
