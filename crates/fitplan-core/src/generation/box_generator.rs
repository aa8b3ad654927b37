//! BoxPlanGenerator -- object-safe dynamic dispatch wrapper for PlanGenerator.
//!
//! 1. Define an object-safe `PlanGeneratorDyn` trait with boxed futures
//! 2. Blanket-impl `PlanGeneratorDyn` for all `T: PlanGenerator`
//! 3. `BoxPlanGenerator` wraps `Box<dyn PlanGeneratorDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use fitplan_types::generation::{GenerationError, GenerationOutput, GenerationRequest};

use super::generator::PlanGenerator;

/// Object-safe version of [`PlanGenerator`] with boxed futures.
pub trait PlanGeneratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationOutput, GenerationError>> + Send + 'a>>;
}

impl<T: PlanGenerator> PlanGeneratorDyn for T {
    fn name(&self) -> &str {
        PlanGenerator::name(self)
    }

    fn model(&self) -> &str {
        PlanGenerator::model(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationOutput, GenerationError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased generator for runtime backend selection.
///
/// Since `PlanGenerator` uses RPITIT, it cannot be used as a trait object
/// directly. This wrapper exposes the same methods over a
/// `PlanGeneratorDyn` trait object.
pub struct BoxPlanGenerator {
    inner: Box<dyn PlanGeneratorDyn + Send + Sync>,
}

impl BoxPlanGenerator {
    /// Wrap a concrete `PlanGenerator`.
    pub fn new<T: PlanGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn model(&self) -> &str {
        self.inner.model()
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, GenerationError> {
        self.inner.generate_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_types::generation::SamplingParams;

    struct EchoGenerator;

    impl PlanGenerator for EchoGenerator {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationOutput, GenerationError> {
            Ok(GenerationOutput::text(request.prompt.to_uppercase()))
        }
    }

    #[tokio::test]
    async fn test_box_generator_delegates() {
        let boxed = BoxPlanGenerator::new(EchoGenerator);
        assert_eq!(boxed.name(), "echo");
        assert_eq!(boxed.model(), "echo-1");

        let request = GenerationRequest {
            prompt: "age: 30".to_string(),
            sampling: SamplingParams::default(),
        };
        let output = boxed.generate(&request).await.unwrap();
        assert_eq!(output.text, "AGE: 30");
        assert_eq!(output.generated_tokens, None);
    }
}
