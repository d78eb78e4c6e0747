//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::deals::DealTable;
use crate::simulator::Simulator;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The read-only deal table
    pub table: Arc<DealTable>,
    /// Approval rule for the simulator tab
    pub simulator: Simulator,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(table: Arc<DealTable>, simulator: Simulator, config: ApiConfig) -> Self {
        Self {
            table,
            simulator,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Build state from the loaded table and the full application config
    pub fn from_config(table: Arc<DealTable>, config: &Config) -> Self {
        Self::new(
            table,
            Simulator::new(config.simulator.income_multiplier),
            ApiConfig::from_config(config),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; permissive when empty
    pub cors_origins: Vec<String>,
    /// Built dashboard UI to serve at `/`
    pub static_dir: Option<PathBuf>,
    /// Histogram bins when the request does not ask for a count
    pub default_bins: Option<usize>,
    /// Default page size of the deal list
    pub default_page_size: usize,
    /// Maximum page size of the deal list
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
            cors_origins: Vec::new(),
            static_dir: None,
            default_bins: None,
            default_page_size: 20,
            max_page_size: 500,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Runtime API settings from the loaded config file
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.api.host.clone(),
            port: config.api.port,
            cors_origins: config.api.cors_origins.clone(),
            static_dir: config.api.static_dir.as_ref().map(PathBuf::from),
            default_bins: config.overview.bins,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
