//! Overview Routes
//!
//! - GET /api/v1/overview - Price and churn distributions over all deals

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::{Overview, MAX_BINS};
use crate::api::dto::OverviewParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/overview
///
/// Histograms and summary statistics for the overview tab.
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    params: Result<Query<OverviewParams>, QueryRejection>,
) -> ApiResult<Json<Overview>> {
    let Query(params) = params?;
    let bins = validate_bins(params.bins.or(state.config.default_bins))?;
    Ok(Json(Overview::compute(&state.table, bins)))
}

fn validate_bins(bins: Option<usize>) -> ApiResult<Option<usize>> {
    match bins {
        Some(n) if n == 0 || n > MAX_BINS => Err(ApiError::Validation(format!(
            "bins must be between 1 and {}, got {}",
            MAX_BINS, n
        ))),
        other => Ok(other),
    }
}
