use std::env;
use std::fmt;

use crate::engines::diversity::DEFAULT_SIGNIFICANCE_THRESHOLD;
use crate::engines::planning::PlannerConfig;
use crate::telemetry::LogStyle;

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub telemetry: TelemetryConfig,
    pub planning: PlannerConfig,
    pub diversity: DiversityConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("TALENT_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("TALENT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = PlannerConfig::default();
        let planning = PlannerConfig {
            default_attrition_rate: read_number(
                "TALENT_ATTRITION_RATE",
                defaults.default_attrition_rate,
            )?,
            default_time_to_fill: read_number(
                "TALENT_TIME_TO_FILL",
                defaults.default_time_to_fill,
            )?,
            default_cost_per_hire: read_number(
                "TALENT_COST_PER_HIRE",
                defaults.default_cost_per_hire,
            )?,
        };

        let significance_threshold =
            read_number("TALENT_PAY_SIGNIFICANCE", DEFAULT_SIGNIFICANCE_THRESHOLD)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                style: LogStyle::for_environment(environment),
            },
            planning,
            diversity: DiversityConfig {
                significance_threshold,
            },
        })
    }
}

fn read_number<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls. The style follows `TALENT_ENV`.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub style: LogStyle,
}

/// Pay-equity analysis settings.
#[derive(Debug, Clone)]
pub struct DiversityConfig {
    pub significance_threshold: f64,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => write!(f, "{key} must be a valid number"),
        }
    }
}

impl std::error::Error for ConfigError {}
