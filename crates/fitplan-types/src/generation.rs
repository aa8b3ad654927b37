//! Request/response types for the text-generation collaborator.
//!
//! The model itself is opaque; these types only describe what is sent to it
//! (a prompt plus sampling knobs) and what comes back (decoded text).

use serde::{Deserialize, Serialize};

/// Sampling knobs passed to the model on every call.
///
/// The defaults are near-greedy but still stochastic, so two identical
/// prompts can produce different plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

fn default_max_new_tokens() -> u32 {
    1500
}

fn default_do_sample() -> bool {
    true
}

fn default_temperature() -> f64 {
    0.1
}

fn default_top_p() -> f64 {
    0.1
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            do_sample: default_do_sample(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

/// A single generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub sampling: SamplingParams,
}

/// Decoded model output for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    /// Decoded text with special tokens removed.
    pub text: String,
    /// Number of tokens generated, when the runtime reports it.
    pub generated_tokens: Option<u32>,
}

impl GenerationOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generated_tokens: None,
        }
    }
}

/// Errors from the generation collaborator.
///
/// None of these are retried; the caller surfaces them as a server error.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("inference server returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("failed to decode inference response: {0}")]
    Decode(String),

    #[error("model unavailable: {0}")]
    Unavailable(String),
}
