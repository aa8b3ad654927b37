//! PlanGenerator trait definition.
//!
//! The model is an opaque text-to-text collaborator: it gets a prompt plus
//! sampling knobs and returns decoded text. Implementations live in
//! fitplan-infra (e.g., `TextGenerationClient`) or in tests as fakes.

use fitplan_types::generation::{GenerationError, GenerationOutput, GenerationRequest};

/// Trait for text-generation backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Wrap in
/// [`super::BoxPlanGenerator`] when the backend is chosen at runtime.
pub trait PlanGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "text-generation-inference").
    fn name(&self) -> &str;

    /// Identifier of the model that serves requests.
    fn model(&self) -> &str;

    /// Run one generation. May take a long time; not cancellable.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationOutput, GenerationError>> + Send;
}
