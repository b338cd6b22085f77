// src/config.rs
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "SIGNUP_OUTPUT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    output_format: OutputFormat,
    transition: Duration,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_transition_ms() -> u64 {
    400
}

fn default_log_filter() -> String {
    "info".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup("SIGNUP_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        let transition_ms = lookup("SIGNUP_TRANSITION_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_transition_ms);

        let log_filter = lookup("RUST_LOG").unwrap_or_else(default_log_filter);

        Ok(Self {
            output_format,
            transition: Duration::from_millis(transition_ms),
            log_filter,
        })
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
