use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Distinguishes runtime behavior for different stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    /// Directory receiving report artifacts and snapshots. Resolved once
    /// here and passed explicitly into the reporter; never re-inferred from
    /// the filesystem inside the core.
    pub data_dir: PathBuf,
    pub telemetry: TelemetryConfig,
}

/// Marker directory present only in containerized deployments.
const CONTAINER_MARKER: &str = "/app";

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = match env::var("APP_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            data_dir,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    if Path::new(CONTAINER_MARKER).exists() {
        return Ok(Path::new(CONTAINER_MARKER).join("data"));
    }

    let cwd = env::current_dir().map_err(|source| ConfigError::WorkingDir { source })?;
    Ok(cwd.join("data"))
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    WorkingDir { source: std::io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WorkingDir { .. } => {
                write!(f, "could not resolve the current working directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::WorkingDir { source } => Some(source),
        }
    }
}
