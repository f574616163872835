//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks. The dataset
//! is read-only, so handlers share it without locking and derive their
//! views per request.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, DashboardConfig};
use crate::dataset::PopulationDataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Population table loaded at startup
    pub dataset: Arc<PopulationDataset>,
    /// Dashboard defaults (title, default year, theme)
    pub dashboard: Arc<DashboardConfig>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        dataset: Arc<PopulationDataset>,
        dashboard: DashboardConfig,
        config: ApiConfig,
    ) -> Self {
        Self {
            dataset,
            dashboard: Arc::new(dashboard),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
