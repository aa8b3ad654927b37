//! TextGenerationClient -- concrete [`PlanGenerator`] for a text-generation
//! inference server.
//!
//! The server owns the model weights and the compute device. This client
//! only forwards the prompt and sampling knobs to `/generate` and hands back
//! the decoded text. Calls are not retried and have no timeout: a slow
//! generation occupies the request for as long as the model needs.

use fitplan_core::generation::PlanGenerator;
use fitplan_types::config::GenerationConfig;
use fitplan_types::generation::{GenerationError, GenerationOutput, GenerationRequest};

use super::types::{ErrorResponse, GenerateParameters, GenerateRequest, GenerateResponse, ServerInfo};

/// Client for a text-generation inference server.
#[derive(Debug)]
pub struct TextGenerationClient {
    client: reqwest::Client,
    base_url: String,
    base_model: String,
    adapter_id: Option<String>,
}

impl TextGenerationClient {
    /// Build a client from configuration without contacting the server.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to create HTTP client: {e}")))?;

        let adapter = config.adapter.trim();

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            base_model: config.base_model.clone(),
            adapter_id: (!adapter.is_empty()).then(|| adapter.to_string()),
        })
    }

    /// Build a client and verify the server is up and serving a model.
    pub async fn connect(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let client = Self::new(config)?;
        let info = client.info().await?;

        if info.model_id != client.base_model {
            tracing::warn!(
                expected = %client.base_model,
                served = %info.model_id,
                "Inference server reports a different base model"
            );
        }

        tracing::info!(
            endpoint = %client.base_url,
            model = %info.model_id,
            adapter = client.adapter_id.as_deref().unwrap_or("none"),
            device = info.model_device_type.as_deref().unwrap_or("unknown"),
            server_version = info.version.as_deref().unwrap_or("unknown"),
            "Connected to inference server"
        );
        Ok(client)
    }

    /// Fetch server metadata from `GET /info`.
    pub async fn info(&self) -> Result<ServerInfo, GenerationError> {
        let response = self
            .client
            .get(self.url("/info"))
            .send()
            .await
            .map_err(|e| GenerationError::Unavailable(format!("inference server unreachable: {e}")))?;

        let response = Self::check_status(response).await?;
        response
            .json::<ServerInfo>()
            .await
            .map_err(|e| GenerationError::Decode(format!("failed to parse /info response: {e}")))
    }

    pub fn adapter_id(&self) -> Option<&str> {
        self.adapter_id.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn to_generate_request(&self, request: &GenerationRequest) -> GenerateRequest {
        GenerateRequest {
            inputs: request.prompt.clone(),
            parameters: GenerateParameters {
                max_new_tokens: request.sampling.max_new_tokens,
                do_sample: request.sampling.do_sample,
                temperature: request.sampling.temperature,
                top_p: request.sampling.top_p,
                adapter_id: self.adapter_id.clone(),
                details: true,
            },
        }
    }

    /// Map a non-2xx response into [`GenerationError::Upstream`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        let body = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(err) => match err.error_type {
                Some(kind) => format!("{kind}: {}", err.error),
                None => err.error,
            },
            Err(_) => raw,
        };

        Err(GenerationError::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}

impl PlanGenerator for TextGenerationClient {
    fn name(&self) -> &str {
        "text-generation-inference"
    }

    fn model(&self) -> &str {
        &self.base_model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput, GenerationError> {
        let body = self.to_generate_request(request);

        let response = self
            .client
            .post(self.url("/generate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("HTTP request failed: {e}")))?;

        let response = Self::check_status(response).await?;
        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(format!("failed to parse /generate response: {e}")))?;

        let details = generated.details.unwrap_or_default();
        tracing::debug!(
            finish_reason = details.finish_reason.as_deref().unwrap_or("unknown"),
            generated_tokens = ?details.generated_tokens,
            "Generation finished"
        );

        Ok(GenerationOutput {
            text: generated.generated_text,
            generated_tokens: details.generated_tokens,
        })
    }
}
