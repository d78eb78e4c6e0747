//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the API payload
//! types the pages render.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Overview distributions, fetched once per session
    pub overview: RwSignal<Option<Overview>>,
    /// Server health, shown in the footer
    pub health: RwSignal<Option<Health>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Overview payload
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Overview {
    pub rows: usize,
    pub price: Distribution,
    pub churn: Distribution,
}

/// One column's distribution
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Distribution {
    pub title: String,
    pub color: String,
    pub summary: Summary,
    pub histogram: Histogram,
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Details of a found deal
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct DealDetails {
    pub id: usize,
    /// `None` when the cell was empty in the table
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub churn: Option<f64>,
    #[serde(default)]
    pub priority: Option<f64>,
    pub rank: usize,
    pub total: usize,
}

/// Lookup view payload
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupResult {
    Idle,
    NotFound {
        id: i64,
        #[serde(default)]
        message: Option<String>,
    },
    Found {
        #[serde(flatten)]
        details: DealDetails,
    },
}

/// Simulator view payload
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct SimulationResult {
    pub outcome: String,
    #[serde(default)]
    pub message: Option<String>,
    pub income_multiplier: f64,
}

impl SimulationResult {
    pub fn is_approved(&self) -> bool {
        self.outcome == "approved"
    }
}

/// Health payload
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
    pub rows: usize,
    pub loaded_at: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        overview: create_rw_signal(None),
        health: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_result_found() {
        let json = r#"{"status":"found","id":3,"price":8.25,"churn":0.5,"priority":1.0,"rank":0,"total":10,"message":"Deal 3 details"}"#;
        let result: LookupResult = serde_json::from_str(json).unwrap();
        match result {
            LookupResult::Found { details } => {
                assert_eq!(details.id, 3);
                assert_eq!(details.rank, 0);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_result_found_with_empty_cell() {
        let json = r#"{"status":"found","id":0,"price":null,"churn":0.5,"priority":2.0,"rank":0,"total":2,"message":"Deal 0 details"}"#;
        let result: LookupResult = serde_json::from_str(json).unwrap();
        match result {
            LookupResult::Found { details } => {
                assert_eq!(details.price, None);
                assert_eq!(details.churn, Some(0.5));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_result_not_found() {
        let json = r#"{"status":"not_found","id":42,"message":"Deal with ID 42 not found."}"#;
        let result: LookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result,
            LookupResult::NotFound {
                id: 42,
                message: Some("Deal with ID 42 not found.".to_string())
            }
        );
    }

    #[test]
    fn test_simulation_result() {
        let json = r#"{"outcome":"approved","message":"Mortgage approved","income_multiplier":10.0}"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert!(result.is_approved());
    }
}
