//! Dashboard Routes
//!
//! Whole-page and per-panel views.
//!
//! - GET /api/v1/dashboard?year&theme - Full dashboard
//! - GET /api/v1/changes/:year - Highest/lowest growth metrics
//! - GET /api/v1/map/:year?theme - Choropleth data
//! - GET /api/v1/heatmap?theme - Population heatmap

use axum::{extract::State, Json};
use std::sync::Arc;

use super::parse_theme;
use crate::api::dto::{DashboardParams, ThemeParams};
use crate::api::error::ApiResult;
use crate::api::extract::{Path, Query};
use crate::api::state::AppState;
use crate::dashboard::{
    choropleth, heatmap, population_changes, ChangesPanel, ChoroplethMap, DashboardView, Heatmap,
    Selection,
};

/// GET /api/v1/dashboard
///
/// Resolve the selection against the configured defaults and build every panel.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> ApiResult<Json<DashboardView>> {
    let theme = parse_theme(params.theme.as_deref(), state.dashboard.color_theme)?;
    let selection = Selection::resolve(&state.dataset, &state.dashboard, params.year, Some(theme));

    tracing::debug!(year = selection.year, theme = %selection.theme, "Building dashboard");

    let view = DashboardView::build(&state.dataset, selection, &state.dashboard)?;
    Ok(Json(view))
}

/// GET /api/v1/changes/:year
pub async fn get_changes(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
) -> ApiResult<Json<ChangesPanel>> {
    Ok(Json(population_changes(&state.dataset, year)?))
}

/// GET /api/v1/map/:year
pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
    Query(params): Query<ThemeParams>,
) -> ApiResult<Json<ChoroplethMap>> {
    let theme = parse_theme(params.theme.as_deref(), state.dashboard.color_theme)?;
    Ok(Json(choropleth(&state.dataset, year, theme)?))
}

/// GET /api/v1/heatmap
pub async fn get_heatmap(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ThemeParams>,
) -> ApiResult<Json<Heatmap>> {
    let theme = parse_theme(params.theme.as_deref(), state.dashboard.color_theme)?;
    Ok(Json(heatmap(&state.dataset, theme)))
}
