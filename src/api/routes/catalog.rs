//! Catalog Routes
//!
//! Selector options and number formatting.
//!
//! - GET /api/v1/years - Selectable years
//! - GET /api/v1/themes - Selectable color themes
//! - GET /api/v1/format?value=n - Compact number formatting

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::analysis::format_compact;
use crate::api::dto::{FormatParams, FormatResponse, ThemesResponse, YearsResponse};
use crate::api::extract::Query;
use crate::api::state::AppState;
use crate::dashboard::{default_year, year_options, ColorTheme};

/// GET /api/v1/years
pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: year_options(&state.dataset),
        default_year: default_year(&state.dataset, &state.dashboard),
    })
}

/// GET /api/v1/themes
pub async fn list_themes(State(state): State<Arc<AppState>>) -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: ColorTheme::all().to_vec(),
        default_theme: state.dashboard.color_theme,
    })
}

/// GET /api/v1/format
pub async fn format_number(Query(params): Query<FormatParams>) -> Json<FormatResponse> {
    Json(FormatResponse {
        value: params.value,
        display: format_compact(params.value),
    })
}
