//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deals::{nullable_f64, Deal, DealId};
use crate::lookup::LookupOutcome;
use crate::simulator::SimulationOutcome;

// ============================================
// OVERVIEW DTOs
// ============================================

/// Query parameters for GET /api/v1/overview
#[derive(Debug, Default, Deserialize)]
pub struct OverviewParams {
    /// Histogram bin count (1..=200)
    #[serde(default)]
    pub bins: Option<usize>,
}

// ============================================
// DEAL DTOs
// ============================================

/// Query parameters for GET /api/v1/deals
#[derive(Debug, Default, Deserialize)]
pub struct DealListParams {
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// A deal together with its processing rank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedDeal {
    pub rank: usize,
    pub id: DealId,
    #[serde(deserialize_with = "nullable_f64")]
    pub price: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub churn: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub priority: f64,
}

impl RankedDeal {
    pub fn new(rank: usize, deal: &Deal) -> Self {
        Self {
            rank,
            id: deal.id,
            price: deal.price,
            churn: deal.churn,
            priority: deal.priority,
        }
    }
}

/// Deals in processing order
#[derive(Debug, Serialize, Deserialize)]
pub struct DealListResponse {
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub deals: Vec<RankedDeal>,
}

/// Lookup view response
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(flatten)]
    pub outcome: LookupOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<LookupOutcome> for LookupResponse {
    fn from(outcome: LookupOutcome) -> Self {
        Self {
            message: outcome.message(),
            outcome,
        }
    }
}

// ============================================
// SIMULATOR DTOs
// ============================================

/// Simulator view response
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub outcome: SimulationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub income_multiplier: f64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Where the deal table was loaded from
    pub source: String,
    /// Number of deals loaded
    pub rows: usize,
    /// When the table was loaded
    pub loaded_at: DateTime<Utc>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deals::{ColumnMapping, DealTable};
    use crate::lookup::{self, LookupRequest};

    const WITH_EMPTY_CELL: &str = "\
__price_predict,__churn_prob,__priority
,0.5,2
3.0,0.1,1
";

    fn table() -> DealTable {
        DealTable::from_reader(WITH_EMPTY_CELL.as_bytes(), &ColumnMapping::default(), "t").unwrap()
    }

    #[test]
    fn test_deal_list_with_empty_cell_round_trips() {
        let table = table();
        let response = DealListResponse {
            total: table.len(),
            offset: 0,
            limit: 20,
            deals: table
                .page(0, 20)
                .into_iter()
                .map(|(rank, deal)| RankedDeal::new(rank, deal))
                .collect(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""price":null"#));

        let back: DealListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.deals.len(), 2);
        assert_eq!(back.deals[0].id, 0);
        assert!(back.deals[0].price.is_nan());
        assert_eq!(back.deals[0].churn, 0.5);
        assert_eq!(back.deals[1].price, 3.0);
    }

    #[test]
    fn test_lookup_with_empty_cell_round_trips() {
        let table = table();
        let response = LookupResponse::from(lookup::lookup(&table, &LookupRequest::triggered(0)));

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""price":null"#));

        let back: LookupResponse = serde_json::from_str(&json).unwrap();
        match back.outcome {
            LookupOutcome::Found(details) => {
                assert_eq!(details.id, 0);
                assert!(details.price.is_nan());
                assert_eq!(details.churn, 0.5);
                assert_eq!(details.priority, 2.0);
                assert_eq!(details.rank, 0);
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(back.message.as_deref(), Some("Deal 0 details"));
    }
}
