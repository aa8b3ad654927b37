//! Generation collaborator implementations.
//!
//! Contains the concrete [`PlanGenerator`](fitplan_core::generation::PlanGenerator)
//! backed by a text-generation inference server that hosts the base model
//! with the fitness adapter loaded.

pub mod client;
pub mod types;

pub use client::TextGenerationClient;

use fitplan_core::generation::BoxPlanGenerator;
use fitplan_types::config::GenerationConfig;
use fitplan_types::generation::GenerationError;

/// Connect to the configured inference server and wrap it for dynamic dispatch.
///
/// Called once at startup. Any error here means the model is not available
/// and the service must not start.
pub async fn connect_generator(config: &GenerationConfig) -> Result<BoxPlanGenerator, GenerationError> {
    let client = TextGenerationClient::connect(config).await?;
    Ok(BoxPlanGenerator::new(client))
}
