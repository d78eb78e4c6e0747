//! Deal Lookup
//!
//! The deal-details tab: given an identifier typed by the user and the
//! button's click count, decide what to render.
//!
//! | input                         | outcome                   |
//! |-------------------------------|---------------------------|
//! | no clicks, or no identifier   | `Idle` (render nothing)   |
//! | identifier matches no row     | `NotFound`                |
//! | identifier matches a row      | `Found` with details      |

use serde::{Deserialize, Serialize};

use crate::deals::{nullable_f64, DealId, DealTable};

/// Inputs of the lookup view
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
pub struct LookupRequest {
    #[serde(default)]
    pub deal_id: Option<i64>,
    #[serde(default)]
    pub n_clicks: Option<u32>,
}

impl LookupRequest {
    /// A triggered lookup of `deal_id`
    pub fn triggered(deal_id: i64) -> Self {
        Self {
            deal_id: Some(deal_id),
            n_clicks: Some(1),
        }
    }
}

/// Everything the details panel shows for one deal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DealDetails {
    pub id: DealId,
    #[serde(deserialize_with = "nullable_f64")]
    pub price: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub churn: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub priority: f64,
    /// 0-based position in descending-priority order
    pub rank: usize,
    /// Number of deals the rank is out of
    pub total: usize,
}

/// What the lookup view renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    Idle,
    NotFound { id: i64 },
    Found(DealDetails),
}

impl LookupOutcome {
    /// Human-readable message, if the outcome has one
    pub fn message(&self) -> Option<String> {
        match self {
            LookupOutcome::Idle => None,
            LookupOutcome::NotFound { id } => Some(format!("Deal with ID {} not found.", id)),
            LookupOutcome::Found(details) => Some(format!("Deal {} details", details.id)),
        }
    }
}

/// Evaluate the lookup view against the table
pub fn lookup(table: &DealTable, request: &LookupRequest) -> LookupOutcome {
    let triggered = request.n_clicks.unwrap_or(0) > 0;
    let id = match (triggered, request.deal_id) {
        (true, Some(id)) => id,
        _ => return LookupOutcome::Idle,
    };

    match details(table, id) {
        Some(details) => LookupOutcome::Found(details),
        None => {
            tracing::debug!(deal_id = id, "Deal lookup miss");
            LookupOutcome::NotFound { id }
        }
    }
}

/// Details for one deal, `None` when the id matches no row
pub fn details(table: &DealTable, id: i64) -> Option<DealDetails> {
    let deal = table.find(id)?;
    let rank = table.rank_of(deal.id)?;

    Some(DealDetails {
        id: deal.id,
        price: deal.price,
        churn: deal.churn,
        priority: deal.priority,
        rank,
        total: table.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DealTable {
        DealTable::from_rows(vec![
            (12.5, 0.10, 3.0),
            (8.25, 0.55, 7.5),
            (20.0, 0.02, 1.0),
        ])
    }

    #[test]
    fn test_not_triggered_is_idle() {
        let table = table();
        let request = LookupRequest {
            deal_id: Some(1),
            n_clicks: None,
        };
        assert_eq!(lookup(&table, &request), LookupOutcome::Idle);

        let request = LookupRequest {
            deal_id: Some(1),
            n_clicks: Some(0),
        };
        assert_eq!(lookup(&table, &request), LookupOutcome::Idle);
    }

    #[test]
    fn test_missing_id_is_idle() {
        let request = LookupRequest {
            deal_id: None,
            n_clicks: Some(3),
        };
        assert_eq!(lookup(&table(), &request), LookupOutcome::Idle);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let table = table();
        let outcome = lookup(&table, &LookupRequest::triggered(42));
        assert_eq!(outcome, LookupOutcome::NotFound { id: 42 });
        assert_eq!(outcome.message().unwrap(), "Deal with ID 42 not found.");

        let outcome = lookup(&table, &LookupRequest::triggered(-3));
        assert_eq!(outcome, LookupOutcome::NotFound { id: -3 });
    }

    #[test]
    fn test_found_returns_stored_fields() {
        let outcome = lookup(&table(), &LookupRequest::triggered(1));
        match outcome {
            LookupOutcome::Found(details) => {
                assert_eq!(details.id, 1);
                assert_eq!(details.price, 8.25);
                assert_eq!(details.churn, 0.55);
                assert_eq!(details.rank, 0);
                assert_eq!(details.total, 3);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_is_a_valid_id() {
        let outcome = lookup(&table(), &LookupRequest::triggered(0));
        assert!(matches!(outcome, LookupOutcome::Found(d) if d.id == 0 && d.rank == 1));
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(LookupOutcome::NotFound { id: 7 }).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["id"], 7);

        let json = serde_json::to_value(LookupOutcome::Idle).unwrap();
        assert_eq!(json["status"], "idle");
    }
}
