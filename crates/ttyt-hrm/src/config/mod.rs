use crate::personnel::RetirementPolicy;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the deployment.
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
    pub roster: RosterConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_csv = env::var("HRM_ROSTER_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let defaults = RetirementPolicy::default();
        let retirement = RetirementPolicy {
            male_age: retirement_age("HRM_RETIREMENT_AGE_MALE", defaults.male_age)?,
            female_age: retirement_age("HRM_RETIREMENT_AGE_FEMALE", defaults.female_age)?,
            window_months: defaults.window_months,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            roster: RosterConfig {
                seed_csv,
                retirement,
            },
        })
    }
}

fn retirement_age(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|age| (1..=100).contains(age))
            .ok_or(ConfigError::InvalidRetirementAge { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Where the session roster comes from and how retirement is evaluated.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub seed_csv: Option<PathBuf>,
    pub retirement: RetirementPolicy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRetirementAge { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRetirementAge { var, value } => {
                write!(f, "{var} must be a whole number of years, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("HRM_ROSTER_CSV");
        env::remove_var("HRM_RETIREMENT_AGE_MALE");
        env::remove_var("HRM_RETIREMENT_AGE_FEMALE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.roster.seed_csv.is_none());
        assert_eq!(config.roster.retirement, RetirementPolicy::default());
    }

    #[test]
    fn reads_roster_and_retirement_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("HRM_ROSTER_CSV", "/srv/hrm/roster.csv");
        env::set_var("HRM_RETIREMENT_AGE_MALE", " 61 ");
        env::set_var("HRM_RETIREMENT_AGE_FEMALE", "58");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.roster.seed_csv,
            Some(PathBuf::from("/srv/hrm/roster.csv"))
        );
        assert_eq!(config.roster.retirement.male_age, 61);
        assert_eq!(config.roster.retirement.female_age, 58);
        assert_eq!(config.roster.retirement.window_months, 6);
    }

    #[test]
    fn rejects_non_numeric_retirement_age() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("HRM_RETIREMENT_AGE_FEMALE", "sixty");
        let err = AppConfig::load().expect_err("invalid age rejected");
        reset_env();

        match err {
            ConfigError::InvalidRetirementAge { var, value } => {
                assert_eq!(var, "HRM_RETIREMENT_AGE_FEMALE");
                assert_eq!(value, "sixty");
            }
        }
    }
}
