//! Deal Routes
//!
//! - GET /api/v1/deals - Deals in processing order (highest priority first)
//! - GET /api/v1/deals/lookup - Lookup view (`deal_id`, `n_clicks`)
//! - GET /api/v1/deals/:id - A single deal with its rank

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DealListParams, DealListResponse, LookupResponse, RankedDeal};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::lookup::{self, DealDetails, LookupRequest};

/// GET /api/v1/deals
///
/// Page through deals ranked by descending priority.
pub async fn list_deals(
    State(state): State<Arc<AppState>>,
    params: Result<Query<DealListParams>, QueryRejection>,
) -> ApiResult<Json<DealListResponse>> {
    let Query(params) = params?;
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(state.config.default_page_size);

    if limit == 0 || limit > state.config.max_page_size {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {}",
            state.config.max_page_size
        )));
    }

    let deals = state
        .table
        .page(offset, limit)
        .into_iter()
        .map(|(rank, deal)| RankedDeal::new(rank, deal))
        .collect();

    Ok(Json(DealListResponse {
        total: state.table.len(),
        offset,
        limit,
        deals,
    }))
}

/// GET /api/v1/deals/lookup
///
/// Evaluate the lookup view. Every outcome, including "not found", is a 200;
/// a `deal_id` that is not an integer is a 400.
pub async fn lookup_deal(
    State(state): State<Arc<AppState>>,
    request: Result<Query<LookupRequest>, QueryRejection>,
) -> ApiResult<Json<LookupResponse>> {
    let Query(request) = request?;
    Ok(Json(lookup::lookup(&state.table, &request).into()))
}

/// GET /api/v1/deals/:id
///
/// Get a single deal by id.
pub async fn get_deal(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DealDetails>> {
    let Path(id) = id?;
    lookup::details(&state.table, id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Deal with id {} not found", id)))
}
