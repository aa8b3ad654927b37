//! Service configuration loader for Fitplan.
//!
//! Reads an optional TOML file into [`FitplanConfig`] and applies
//! environment overrides. Without a file, the defaults describe a local
//! inference server on `127.0.0.1:8080` serving `t5-small` plus the fitness
//! adapter.

use std::path::Path;

use fitplan_types::config::FitplanConfig;
use fitplan_types::error::ConfigError;

/// Overrides `generation.endpoint` when set and non-empty.
pub const ENDPOINT_ENV: &str = "FITPLAN_GENERATION_ENDPOINT";

/// Load configuration from `path`, or defaults when `path` is `None`.
///
/// Unlike a missing default location, an explicitly requested file that
/// cannot be read is an error.
pub async fn load_config(path: Option<&Path>) -> Result<FitplanConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path).await?,
        None => {
            tracing::debug!("No config file given, using defaults");
            FitplanConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

async fn read_config_file(path: &Path) -> Result<FitplanConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let config = toml::from_str::<FitplanConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut FitplanConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = lookup(ENDPOINT_ENV) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            validate_endpoint(endpoint)?;
            config.generation.endpoint = endpoint.to_string();
        }
    }

    validate_endpoint(&config.generation.endpoint)
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: "generation.endpoint".to_string(),
            message: format!("'{endpoint}' must start with http:// or https://"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_pass_validation() {
        let mut config = FitplanConfig::default();
        apply_env_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, FitplanConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("fitplan.toml");
        tokio::fs::write(
            &config_path,
            r#"
[server]
host = "127.0.0.1"
port = 9100

[generation]
endpoint = "http://inference:3000"

[generation.sampling]
max_new_tokens = 512
"#,
        )
        .await
        .unwrap();

        let config = read_config_file(&config_path).await.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.generation.endpoint, "http://inference:3000");
        assert_eq!(config.generation.sampling.max_new_tokens, 512);
        assert_eq!(config.generation.sampling.temperature, 0.1);
    }

    #[tokio::test]
    async fn load_config_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("nope.toml")))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("fitplan.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = load_config(Some(&config_path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_override_replaces_endpoint() {
        let mut config = FitplanConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == ENDPOINT_ENV).then(|| " https://gpu.internal ".to_string())
        })
        .unwrap();
        assert_eq!(config.generation.endpoint, "https://gpu.internal");
    }

    #[test]
    fn env_override_blank_is_ignored() {
        let mut config = FitplanConfig::default();
        apply_env_overrides(&mut config, |_| Some("  ".to_string())).unwrap();
        assert_eq!(config.generation.endpoint, "http://127.0.0.1:8080");
    }

    #[test]
    fn env_override_rejects_non_http_endpoint() {
        let mut config = FitplanConfig::default();
        let err = apply_env_overrides(&mut config, |_| Some("gpu:8080".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
