//! Population Routes
//!
//! Ranked population table for a year.
//!
//! - GET /api/v1/population/:year?format=json|csv

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::TableParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::{Path, Query};
use crate::api::state::AppState;
use crate::dashboard::{population_table, PopulationTable};

/// GET /api/v1/population/:year
pub async fn get_population(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
    Query(params): Query<TableParams>,
) -> ApiResult<Response> {
    let table = population_table(&state.dataset, year)?;

    match params.format.to_lowercase().as_str() {
        "json" => Ok((StatusCode::OK, Json(table)).into_response()),
        "csv" => format_csv_response(&table),
        other => Err(ApiError::Validation(format!(
            "Invalid format: {}. Use json or csv",
            other
        ))),
    }
}

/// Format the table as CSV
fn format_csv_response(table: &PopulationTable) -> ApiResult<Response> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["rank", "states", "population"])
        .map_err(|e| ApiError::Internal(format!("CSV write failed: {}", e)))?;

    for row in &table.rows {
        writer
            .write_record([
                row.rank.to_string(),
                row.region.clone(),
                row.population.to_string(),
            ])
            .map_err(|e| ApiError::Internal(format!("CSV write failed: {}", e)))?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV flush failed: {}", e)))?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body).into_response())
}
