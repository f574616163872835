//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::ColorTheme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the reshaped population CSV
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/us-population-2010-2019-reshaped.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
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

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory with a static front-end served at `/`
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            static_dir: None,
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

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard presentation defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Year selected when a session starts; the earliest year when unset
    #[serde(default)]
    pub default_year: Option<i32>,

    #[serde(default)]
    pub color_theme: ColorTheme,
}

fn default_title() -> String {
    "US Population Dashboard".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_year: None,
            color_theme: ColorTheme::default(),
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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

    /// First existing config file among the default locations
    pub fn find_default() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("popdash").join("config.toml")),
            Some(PathBuf::from("/etc/popdash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(path) = lookup("POPDASH_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }

        // API overrides
        if let Some(host) = lookup("POPDASH_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("POPDASH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Dashboard overrides
        if let Some(year) = lookup("POPDASH_DEFAULT_YEAR") {
            if let Ok(y) = year.parse() {
                self.dashboard.default_year = Some(y);
            }
        }
        if let Some(theme) = lookup("POPDASH_COLOR_THEME") {
            if let Ok(t) = theme.parse() {
                self.dashboard.color_theme = t;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("POPDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("POPDASH_LOG_FORMAT") {
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
    r#"# Popdash Configuration
#
# Environment variables override these settings:
# - POPDASH_DATA_PATH
# - POPDASH_API_HOST
# - POPDASH_API_PORT
# - POPDASH_DEFAULT_YEAR
# - POPDASH_COLOR_THEME
# - POPDASH_LOG_LEVEL
# - POPDASH_LOG_FORMAT

[data]
# Reshaped census CSV (states, states_code, id, year, population)
path = "data/us-population-2010-2019-reshaped.csv"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8501

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Optional directory with a static front-end served at /
# static_dir = "./web"

[dashboard]
# Page title
title = "US Population Dashboard"

# Year selected when a session starts (defaults to the earliest year)
# default_year = 2019

# Color theme: blues, viridis, greens, reds, plasma
color_theme = "blues"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(
            config.data.path,
            PathBuf::from("data/us-population-2010-2019-reshaped.csv")
        );
        assert_eq!(config.api.addr(), "0.0.0.0:8501");
        assert_eq!(config.dashboard.title, "US Population Dashboard");
        assert_eq!(config.dashboard.default_year, None);
        assert_eq!(config.dashboard.color_theme, ColorTheme::Blues);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.api.port, 8501);
        assert!(config.api.cors_origins.is_empty());
        assert!(config.api.static_dir.is_none());
        assert_eq!(config.dashboard.color_theme, ColorTheme::Blues);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse(
            r#"
[dashboard]
default_year = 2019
color_theme = "viridis"
"#,
        )
        .unwrap();

        assert_eq!(config.dashboard.default_year, Some(2019));
        assert_eq!(config.dashboard.color_theme, ColorTheme::Viridis);
        assert_eq!(config.dashboard.title, "US Population Dashboard");
        assert_eq!(config.api.port, 8501);
    }

    #[test]
    fn test_theme_names_case_insensitive_in_file_and_env() {
        let config = Config::parse("[dashboard]\ncolor_theme = \"Viridis\"\n").unwrap();
        assert_eq!(config.dashboard.color_theme, ColorTheme::Viridis);

        let mut config = Config::default();
        config.apply_overrides(|key| (key == "POPDASH_COLOR_THEME").then(|| "Viridis".to_string()));
        assert_eq!(config.dashboard.color_theme, ColorTheme::Viridis);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = Config::parse("[dashboard]\ncolor_theme = \"rainbow\"\n").unwrap_err();
        assert!(err.contains("rainbow") || err.contains("variant"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("POPDASH_DATA_PATH", "/srv/pop.csv"),
            ("POPDASH_API_PORT", "9000"),
            ("POPDASH_DEFAULT_YEAR", "2015"),
            ("POPDASH_COLOR_THEME", "Greens"),
            ("POPDASH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.path, PathBuf::from("/srv/pop.csv"));
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.dashboard.default_year, Some(2015));
        assert_eq!(config.dashboard.color_theme, ColorTheme::Greens);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_override_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "POPDASH_API_PORT" => Some("not-a-port".to_string()),
            "POPDASH_COLOR_THEME" => Some("rainbow".to_string()),
            _ => None,
        });

        assert_eq!(config.api.port, 8501);
        assert_eq!(config.dashboard.color_theme, ColorTheme::Blues);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = 8600\n\n[data]\npath = \"pop.csv\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.port, 8600);
        assert_eq!(config.data.path, PathBuf::from("pop.csv"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/popdash.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
