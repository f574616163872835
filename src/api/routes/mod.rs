//! API Routes
//!
//! Route handlers organized by functionality.

pub mod catalog;
pub mod dashboard;
pub mod differences;
pub mod health;
pub mod population;

use axum::http::Uri;

use crate::api::error::{ApiError, ApiResult};
use crate::dashboard::ColorTheme;

/// Fallback for requests no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Parse an optional `theme` query value, falling back to `default`
pub(crate) fn parse_theme(theme: Option<&str>, default: ColorTheme) -> ApiResult<ColorTheme> {
    match theme {
        None | Some("") => Ok(default),
        Some(name) => Ok(name.parse()?),
    }
}
