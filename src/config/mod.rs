mod errors;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

pub use errors::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "bank.toml";

/// Runtime settings of the client.
///
/// Resolved from defaults, then an optional TOML file, then `BANK_*` environment
/// variables. Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base url of the bank API, without the `/api` suffix.
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 10,
            log_level: "error".to_string()
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `bank.toml` when it exists, then applies the environment.
    ///
    /// An explicitly given file must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
            None => Self::default()
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source
        })?;

        debug!("Loaded settings from {}", path.display());

        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies `BANK_API_URL`, `BANK_REQUEST_TIMEOUT_SECS` and `BANK_LOG_LEVEL` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(value) = lookup("BANK_API_URL") {
            self.api_url = value;
        }

        if let Some(value) = lookup("BANK_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "BANK_REQUEST_TIMEOUT_SECS",
                value
            })?;
        }

        if let Some(value) = lookup("BANK_LOG_LEVEL") {
            self.log_level = value;
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
