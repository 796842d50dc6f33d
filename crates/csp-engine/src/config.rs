//! Engine configuration.

use thiserror::Error;

const DEFAULT_PAGE_SIZE: usize = 10;

/// Invalid engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Tunables for the comparison engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Ranked entries shown per page.
    pub page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading
    /// env vars.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable has an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load engine configuration from environment variables already in the
    /// process, without reading `.env` files.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        build_engine_config(|key| std::env::var(key))
    }
}

/// Build engine configuration using the provided env-var lookup function.
///
/// Parsing and validation take a lookup closure rather than reading the
/// process environment directly, so tests drive them with a plain map.
fn build_engine_config<F>(lookup: F) -> Result<EngineConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let page_size = match lookup("CSP_PAGE_SIZE") {
        Ok(raw) => {
            let parsed = raw
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "CSP_PAGE_SIZE".to_string(),
                    reason: e.to_string(),
                })?;
            if parsed == 0 {
                return Err(ConfigError::InvalidEnvVar {
                    var: "CSP_PAGE_SIZE".to_string(),
                    reason: "page size must be at least 1".to_string(),
                });
            }
            parsed
        }
        Err(_) => DEFAULT_PAGE_SIZE,
    };

    Ok(EngineConfig { page_size })
}
