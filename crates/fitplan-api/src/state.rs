//! Application state wiring the plan service and the API key together.
//!
//! AppState is built once at startup and cloned (cheaply, via `Arc`) into
//! every request handler. Nothing in it changes after construction.

use std::sync::Arc;

use fitplan_core::generation::BoxPlanGenerator;
use fitplan_core::service::plan::PlanService;
use fitplan_infra::generation::connect_generator;
use fitplan_infra::secret::env::EnvApiKeyProvider;
use fitplan_types::config::FitplanConfig;
use secrecy::{ExposeSecret, SecretString};

use crate::http::extractors::auth::ApiKeyDigest;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub plan_service: Arc<PlanService>,
    pub api_key: Arc<ApiKeyDigest>,
}

impl AppState {
    /// Wire state from an already-built generator and the shared secret.
    pub fn new(generator: BoxPlanGenerator, config: &FitplanConfig, api_key: &SecretString) -> Self {
        let plan_service = PlanService::new(generator, config.generation.sampling.clone());
        Self {
            plan_service: Arc::new(plan_service),
            api_key: Arc::new(ApiKeyDigest::new(api_key.expose_secret())),
        }
    }

    /// Initialize the application state: resolve the API key and connect to
    /// the inference server. Failing to reach the model is fatal.
    pub async fn init(config: &FitplanConfig) -> anyhow::Result<Self> {
        let resolved = EnvApiKeyProvider::resolve();

        let generator = connect_generator(&config.generation).await.map_err(|e| {
            anyhow::anyhow!(
                "failed to load model from {}: {e}",
                config.generation.endpoint
            )
        })?;

        tracing::info!(
            key_source = %resolved.source,
            generator = generator.name(),
            model = generator.model(),
            "Application state initialized"
        );
        Ok(Self::new(generator, config, &resolved.key))
    }
}
