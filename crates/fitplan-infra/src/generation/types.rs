//! Text-generation inference server wire types.
//!
//! These mirror the server's `/generate` and `/info` payloads. They are NOT
//! the generic generation types from fitplan-types -- those are
//! backend-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub inputs: String,
    pub parameters: GenerateParameters,
}

/// Generation parameters understood by the server.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateParameters {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f64,
    pub top_p: f64,
    /// Fine-tuning adapter to apply on top of the base model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_id: Option<String>,
    /// Ask for token counts in the response.
    pub details: bool,
}

/// Response body of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub generated_text: String,
    #[serde(default)]
    pub details: Option<GenerateDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateDetails {
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub generated_tokens: Option<u32>,
}

/// Response body of `GET /info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfo {
    pub model_id: String,
    #[serde(default)]
    pub model_device_type: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_type: Option<String>,
}
