//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON. Panel responses
//! reuse the dashboard view-models directly.

use serde::{Deserialize, Serialize};

use crate::analysis::{format_compact, format_population, RankedDifference};
use crate::dashboard::ColorTheme;
use crate::dataset::DatasetStats;

// ============================================
// QUERY PARAMETERS
// ============================================

/// Dashboard query parameters
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    /// Selected year (default: configured default year)
    #[serde(default)]
    pub year: Option<i32>,
    /// Color theme name (default: configured theme)
    #[serde(default)]
    pub theme: Option<String>,
}

/// Theme-only query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub theme: Option<String>,
}

/// Ranked differences query parameters
#[derive(Debug, Default, Deserialize)]
pub struct DifferencesParams {
    /// Maximum number of rows to return
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Population table query parameters
#[derive(Debug, Default, Deserialize)]
pub struct TableParams {
    /// Output format: json (default) or csv
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

/// Number formatting query parameters
#[derive(Debug, Deserialize)]
pub struct FormatParams {
    pub value: i64,
}

// ============================================
// CATALOG DTOs
// ============================================

/// Selectable years
#[derive(Debug, Serialize)]
pub struct YearsResponse {
    /// Years, newest first
    pub years: Vec<i32>,
    pub default_year: i32,
}

/// Selectable color themes
#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<ColorTheme>,
    pub default_theme: ColorTheme,
}

// ============================================
// DIFFERENCE DTOs
// ============================================

/// One ranked region with display strings
#[derive(Debug, Serialize)]
pub struct DifferenceRow {
    /// 1-based position
    pub rank: usize,
    pub region: String,
    pub region_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u32>,
    pub population: u64,
    pub population_delta: i64,
    pub population_display: String,
    pub delta_display: String,
}

impl DifferenceRow {
    pub fn new(rank: usize, ranked: RankedDifference) -> Self {
        Self {
            rank,
            population_display: format_population(ranked.population),
            delta_display: format_compact(ranked.population_delta),
            region: ranked.region,
            region_code: ranked.region_code,
            region_id: ranked.region_id,
            population: ranked.population,
            population_delta: ranked.population_delta,
        }
    }
}

/// Ranked differences response
#[derive(Debug, Serialize)]
pub struct DifferencesResponse {
    pub year: i32,
    /// Previous year, absent when the dataset has no records for it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_year: Option<i32>,
    /// Total regions before `limit` was applied
    pub total: usize,
    pub rows: Vec<DifferenceRow>,
}

// ============================================
// FORMAT DTOs
// ============================================

/// Compact number formatting response
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub value: i64,
    pub display: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    pub dataset: DatasetStats,
    pub uptime_seconds: u64,
    pub version: String,
}
