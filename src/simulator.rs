//! Eligibility Simulator
//!
//! A toy approval rule: approve when monthly income exceeds
//! `income_multiplier × price` and the deal priority is positive.

use serde::{Deserialize, Serialize};

/// Default ratio between income and price required for approval
pub const DEFAULT_INCOME_MULTIPLIER: f64 = 10.0;

/// Inputs of the simulator view
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
pub struct SimulationRequest {
    /// Property price (millions)
    #[serde(default)]
    pub price: Option<f64>,
    /// Monthly income (thousands)
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(default)]
    pub n_clicks: Option<u32>,
}

impl SimulationRequest {
    /// A triggered simulation with every field filled in
    pub fn triggered(price: f64, income: f64, priority: f64) -> Self {
        Self {
            price: Some(price),
            income: Some(income),
            priority: Some(priority),
            n_clicks: Some(1),
        }
    }
}

/// What the simulator view renders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOutcome {
    Idle,
    InvalidInput,
    Approved,
    Rejected,
}

impl SimulationOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SimulationOutcome::Idle => None,
            SimulationOutcome::InvalidInput => Some("Invalid input."),
            SimulationOutcome::Approved => Some("Mortgage approved"),
            SimulationOutcome::Rejected => Some("Application rejected"),
        }
    }
}

/// Stateless approval rule
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    income_multiplier: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_INCOME_MULTIPLIER)
    }
}

impl Simulator {
    pub fn new(income_multiplier: f64) -> Self {
        Self { income_multiplier }
    }

    pub fn income_multiplier(&self) -> f64 {
        self.income_multiplier
    }

    /// Evaluate the simulator view
    pub fn simulate(&self, request: &SimulationRequest) -> SimulationOutcome {
        if request.n_clicks.unwrap_or(0) == 0 {
            return SimulationOutcome::Idle;
        }

        let (price, income, priority) = match (
            present(request.price),
            present(request.income),
            present(request.priority),
        ) {
            (Some(price), Some(income), Some(priority)) => (price, income, priority),
            _ => return SimulationOutcome::InvalidInput,
        };

        if self.is_eligible(price, income, priority) {
            SimulationOutcome::Approved
        } else {
            SimulationOutcome::Rejected
        }
    }

    /// The approval inequality itself
    pub fn is_eligible(&self, price: f64, income: f64, priority: f64) -> bool {
        income > price * self.income_multiplier && priority > 0.0
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
