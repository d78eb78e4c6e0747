//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::deals::ColumnMapping;
use crate::simulator::DEFAULT_INCOME_MULTIPLIER;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub overview: OverviewConfig,

    #[serde(default)]
    pub simulator: SimulatorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: String,

    #[serde(default)]
    pub columns: ColumnMapping,
}

fn default_data_path() -> String {
    "../data/submissions/ml_pandas_submission.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            columns: ColumnMapping::default(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Directory with the built dashboard UI, served at `/` when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            static_dir: None,
        }
    }
}

/// Overview tab configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewConfig {
    /// Histogram bin count; Sturges' rule when unset
    #[serde(default)]
    pub bins: Option<usize>,
}

/// Simulator tab configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_income_multiplier")]
    pub income_multiplier: f64,
}

fn default_income_multiplier() -> f64 {
    DEFAULT_INCOME_MULTIPLIER
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            income_multiplier: default_income_multiplier(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mortgage-desk").join("config.toml")),
            Some(PathBuf::from("/etc/mortgage-desk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        Self::load_first(config_paths.iter().flatten())
    }

    /// Load the first candidate that exists and parses; failures are logged and skipped
    fn load_first<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("MORTGAGE_DESK_DATA_PATH") {
            self.data.path = path;
        }

        if let Some(host) = var("MORTGAGE_DESK_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("MORTGAGE_DESK_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid MORTGAGE_DESK_API_PORT: {}", port),
            }
        }
        if let Some(dir) = var("MORTGAGE_DESK_STATIC_DIR") {
            self.api.static_dir = Some(dir);
        }

        if let Some(level) = var("MORTGAGE_DESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MORTGAGE_DESK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Mortgage Desk Configuration
#
# Environment variables override these settings:
# - MORTGAGE_DESK_DATA_PATH
# - MORTGAGE_DESK_API_HOST
# - MORTGAGE_DESK_API_PORT
# - MORTGAGE_DESK_STATIC_DIR
# - MORTGAGE_DESK_LOG_LEVEL
# - MORTGAGE_DESK_LOG_FORMAT

[data]
# Model output table, read once at startup
path = "../data/submissions/ml_pandas_submission.csv"

[data.columns]
price = "__price_predict"
churn = "__churn_prob"
priority = "__priority"

[api]
host = "0.0.0.0"
port = 8050

# Allowed CORS origins (the dashboard UI dev server)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Serve the built dashboard UI from this directory
# static_dir = "desk-ui/dist"

[overview]
# Histogram bins; Sturges' rule when omitted
# bins = 30

[simulator]
# Approve when income > income_multiplier * price and priority > 0
income_multiplier = 10.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared with a scoped subscriber
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.path, "../data/submissions/ml_pandas_submission.csv");
        assert_eq!(config.data.columns.priority, "__priority");
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.simulator.income_multiplier, 10.0);
        assert!(config.overview.bins.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.data.columns.churn, "__churn_prob");
        assert!(config.api.static_dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [overview]
            bins = 25

            [simulator]
            income_multiplier = 12.5
            "#,
        )
        .unwrap();
        assert_eq!(config.overview.bins, Some(25));
        assert_eq!(config.simulator.income_multiplier, 12.5);
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MORTGAGE_DESK_DATA_PATH", "/data/deals.csv"),
            ("MORTGAGE_DESK_API_PORT", "9000"),
            ("MORTGAGE_DESK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.path, "/data/deals.csv");
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == "MORTGAGE_DESK_API_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.api.port, 8050);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = 8123").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.port, 8123);
    }

    #[test]
    fn test_load_first_skips_and_logs_broken_file() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[api\nport = ").unwrap();
        let mut valid = tempfile::NamedTempFile::new().unwrap();
        writeln!(valid, "[overview]\nbins = 12").unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let paths = [broken.path().to_path_buf(), valid.path().to_path_buf()];
        let config = tracing::subscriber::with_default(subscriber, || Config::load_first(&paths));

        assert_eq!(config.overview.bins, Some(12));
        let text = logs.text();
        assert!(text.contains("WARN"), "{}", text);
        assert!(text.contains("Failed to load config"), "{}", text);
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
