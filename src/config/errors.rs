use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error reading settings at path: {path} | {source}")]
    Read {
        path: String,
        source: std::io::Error
    },
    #[error("Settings are not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue {
        key: &'static str,
        value: String
    }
}
