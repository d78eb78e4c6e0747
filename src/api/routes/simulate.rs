//! Simulator Routes
//!
//! - POST /api/v1/simulate - Evaluate the eligibility rule

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SimulationResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::simulator::SimulationRequest;

/// POST /api/v1/simulate
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SimulationRequest>, JsonRejection>,
) -> ApiResult<Json<SimulationResponse>> {
    let Json(request) = request?;
    let outcome = state.simulator.simulate(&request);

    tracing::debug!(?request, ?outcome, "Simulated application");

    Ok(Json(SimulationResponse {
        outcome,
        message: outcome.message().map(str::to_string),
        income_multiplier: state.simulator.income_multiplier(),
    }))
}
