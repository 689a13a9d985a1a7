//! Application configuration loaded from environment variables.

use std::env;

/// Development default values.
pub mod defaults {
    pub const DEV_HOST: &str = "0.0.0.0";
    pub const DEV_PORT: u16 = 8000;
    pub const DEV_ALLOWED_ORIGINS: &[&str] = &["http://localhost", "http://localhost:8080"];
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Origins allowed by the CORS middleware
    pub allowed_origins: Vec<String>,
    /// Whether POST /api/v1/reset is mounted
    pub enable_reset: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `GSD_HOST`: Server host (default: 0.0.0.0)
    /// - `GSD_PORT`: Server port (default: 8000)
    /// - `GSD_ALLOWED_ORIGINS`: Comma-separated CORS origins
    ///   (default: http://localhost,http://localhost:8080)
    /// - `GSD_ENABLE_RESET`: Mount the reset endpoint (default: true in
    ///   development, false in production)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_str = lookup("RUST_ENV").ok_or(ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = lookup("GSD_HOST").unwrap_or_else(|| defaults::DEV_HOST.to_string());

        let port = lookup("GSD_PORT")
            .unwrap_or_else(|| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("GSD_PORT must be a valid port number"))?;

        let allowed_origins = match lookup("GSD_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => defaults::DEV_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let enable_reset = match lookup("GSD_ENABLE_RESET") {
            Some(raw) => parse_bool(&raw)
                .ok_or(ConfigError::InvalidValue("GSD_ENABLE_RESET must be true or false"))?,
            None => environment.is_development(),
        };

        let config = Config {
            environment,
            host,
            port,
            allowed_origins,
            enable_reset,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that the production configuration is not overly permissive.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.allowed_origins.iter().any(|o| o == "*") {
            errors.push(
                "GSD_ALLOWED_ORIGINS contains '*'. List the allowed origins explicitly."
                    .to_string(),
            );
        }

        if self.allowed_origins.is_empty() {
            errors.push("GSD_ALLOWED_ORIGINS is empty.".to_string());
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
