//! HTTP API Client
//!
//! Functions for communicating with the Mortgage Desk REST API.

use gloo_net::http::{Request, Response};

use crate::state::global::{Health, LookupResult, Overview, SimulationResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8050";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("mortgage_desk_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(serde::Serialize)]
struct SimulationRequest {
    price: Option<f64>,
    income: Option<f64>,
    priority: Option<f64>,
    n_clicks: Option<u32>,
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiError>().await {
            Ok(err) => err.error.message,
            Err(_) => format!("Request failed with status {}", status),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Query string for the lookup view; absent values are left out
pub fn lookup_query(deal_id: Option<i64>, n_clicks: u32) -> String {
    match deal_id {
        Some(id) => format!("deal_id={}&n_clicks={}", id, n_clicks),
        None => format!("n_clicks={}", n_clicks),
    }
}

/// Fetch overview distributions
pub async fn fetch_overview() -> Result<Overview, String> {
    let response = Request::get(&format!("{}/api/v1/overview", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

/// Evaluate the lookup view
pub async fn lookup_deal(deal_id: Option<i64>, n_clicks: u32) -> Result<LookupResult, String> {
    let url = format!(
        "{}/api/v1/deals/lookup?{}",
        get_api_base(),
        lookup_query(deal_id, n_clicks)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

/// Evaluate the simulator view
pub async fn simulate(
    price: Option<f64>,
    income: Option<f64>,
    priority: Option<f64>,
    n_clicks: u32,
) -> Result<SimulationResult, String> {
    let response = Request::post(&format!("{}/api/v1/simulate", get_api_base()))
        .json(&SimulationRequest {
            price,
            income,
            priority,
            n_clicks: Some(n_clicks),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

/// Fetch server health
pub async fn fetch_health() -> Result<Health, String> {
    let response = Request::get(&format!("{}/health", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_query() {
        assert_eq!(lookup_query(Some(5), 1), "deal_id=5&n_clicks=1");
        assert_eq!(lookup_query(None, 2), "n_clicks=2");
    }
}
