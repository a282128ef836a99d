use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_RULES_PATH: &str = "config.json";
const DEFAULT_EXPORT_DIR: &str = ".";

/// Distinguishes runtime behavior for different stages of the bot.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub interview: InterviewConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let rules_path = path_setting("INTERVIEW_RULES_PATH", DEFAULT_RULES_PATH)?;
        let export_dir = path_setting("INTERVIEW_EXPORT_DIR", DEFAULT_EXPORT_DIR)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            interview: InterviewConfig {
                rules_path,
                export_dir,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_setting(key: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptySetting { key }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Where the rule set is read from and where transcripts are written.
#[derive(Debug, Clone)]
pub struct InterviewConfig {
    pub rules_path: PathBuf,
    pub export_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Configuration failures. All of these are fatal at startup.
#[derive(Debug)]
pub enum ConfigError {
    EmptySetting {
        key: &'static str,
    },
    ReadRules {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseRules {
        source: serde_json::Error,
    },
    EmptyQuestions,
    InvalidWeight {
        category: &'static str,
        value: f64,
    },
    EmptyFragment {
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySetting { key } => write!(f, "{key} must not be blank"),
            ConfigError::ReadRules { path, .. } => {
                write!(f, "unable to read rule set from {}", path.display())
            }
            ConfigError::ParseRules { source } => write!(f, "malformed rule set: {source}"),
            ConfigError::EmptyQuestions => write!(f, "rule set must contain at least one question"),
            ConfigError::InvalidWeight { category, value } => write!(
                f,
                "scoring weight '{category}' must be a finite number >= 0 (found {value})"
            ),
            ConfigError::EmptyFragment { field } => {
                write!(f, "'{field}' contains an empty text fragment")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadRules { source, .. } => Some(source),
            ConfigError::ParseRules { source } => Some(source),
            ConfigError::EmptySetting { .. }
            | ConfigError::EmptyQuestions
            | ConfigError::InvalidWeight { .. }
            | ConfigError::EmptyFragment { .. } => None,
        }
    }
}
