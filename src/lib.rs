//! # Mortgage Desk
//!
//! Analytics dashboard over a precomputed table of mortgage-approval model
//! outputs: predicted property price, churn (default) probability and a
//! processing priority per deal.
//!
//! ## Views
//!
//! - **Overview**: price and churn histograms over the whole table
//! - **Deal lookup**: price, churn and priority rank of one deal
//! - **Simulator**: a toy eligibility rule
//!
//! ## Modules
//!
//! - [`deals`]: the immutable deal table loaded from CSV
//! - [`analytics`]: histograms and summary statistics
//! - [`lookup`]: the deal-lookup view
//! - [`simulator`]: the eligibility simulator
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mortgage_desk::deals::{ColumnMapping, DealTable};
//! use mortgage_desk::lookup::{lookup, LookupRequest};
//! use mortgage_desk::simulator::{SimulationRequest, Simulator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = DealTable::load("deals.csv", &ColumnMapping::default())?;
//!
//!     let outcome = lookup(&table, &LookupRequest::triggered(0));
//!     println!("{:?}", outcome);
//!
//!     let verdict = Simulator::default().simulate(&SimulationRequest::triggered(10.0, 150.0, 1.0));
//!     println!("{:?}", verdict.message());
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod deals;
pub mod logging;
pub mod lookup;
pub mod simulator;

pub use analytics::{Distribution, Histogram, Overview, Summary};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    ApiConfig as ConfigApiConfig, Config, ConfigError, DataConfig, LoggingConfig,
    OverviewConfig, SimulatorConfig,
};

pub use deals::{ColumnMapping, Deal, DealError, DealId, DealResult, DealTable, TableInfo};

pub use lookup::{DealDetails, LookupOutcome, LookupRequest};

pub use simulator::{SimulationOutcome, SimulationRequest, Simulator};
