//! Service configuration types for Fitplan.
//!
//! `FitplanConfig` represents the optional `fitplan.toml` that controls the
//! listen address and how the generation collaborator is reached.

use serde::{Deserialize, Serialize};

use crate::generation::SamplingParams;

/// Top-level configuration. All fields have defaults, so an empty file
/// (or no file at all) yields a working local setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitplanConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the model runs and which weights it uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the text-generation inference server.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Pretrained base model the server must have loaded.
    #[serde(default = "default_base_model")]
    pub base_model: String,

    /// Fine-tuning adapter applied on top of the base model.
    #[serde(default = "default_adapter")]
    pub adapter: String,

    #[serde(default)]
    pub sampling: SamplingParams,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_base_model() -> String {
    "t5-small".to_string()
}

fn default_adapter() -> String {
    "./t5_fitness/checkpoint-2500".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            base_model: default_base_model(),
            adapter: default_adapter(),
            sampling: SamplingParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = FitplanConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.generation.base_model, "t5-small");
        assert_eq!(config.generation.adapter, "./t5_fitness/checkpoint-2500");
        assert_eq!(config.generation.sampling.max_new_tokens, 1500);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: FitplanConfig = toml::from_str("").unwrap();
        assert_eq!(config, FitplanConfig::default());
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
[server]
port = 9000

[generation]
endpoint = "http://gpu-box:3000"
adapter = "/models/fitness-lora"

[generation.sampling]
top_p = 0.9
"#;
        let config: FitplanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.generation.endpoint, "http://gpu-box:3000");
        assert_eq!(config.generation.base_model, "t5-small");
        assert_eq!(config.generation.adapter, "/models/fitness-lora");
        assert_eq!(config.generation.sampling.top_p, 0.9);
        assert_eq!(config.generation.sampling.temperature, 0.1);
    }
}
