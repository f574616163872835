//! Difference Routes
//!
//! Year-over-year changes for every region.
//!
//! - GET /api/v1/differences/:year?limit - Ranked differences

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::analysis::compute_ranked_differences;
use crate::api::dto::{DifferenceRow, DifferencesParams, DifferencesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::{Path, Query};
use crate::api::state::AppState;

/// GET /api/v1/differences/:year
///
/// Regions ranked by change from the previous year, largest growth first.
pub async fn get_differences(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
    Query(params): Query<DifferencesParams>,
) -> ApiResult<Json<DifferencesResponse>> {
    if params.limit == Some(0) {
        return Err(ApiError::Validation("limit must be greater than 0".to_string()));
    }

    let ranked = compute_ranked_differences(&state.dataset, year)?;
    let total = ranked.len();
    let limit = params.limit.unwrap_or(total);

    let rows = ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, r)| DifferenceRow::new(i + 1, r))
        .collect();

    let previous_year = year
        .checked_sub(1)
        .filter(|previous| state.dataset.contains_year(*previous));

    Ok(Json(DifferencesResponse {
        year,
        previous_year,
        total,
        rows,
    }))
}
