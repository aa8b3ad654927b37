use thiserror::Error;

/// Errors raised while loading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("invalid config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
