//! Plan service: prompt -> generation -> repair.
//!
//! Holds the process-wide generator handle and sampling knobs. Built once at
//! startup and shared by reference with every request handler.

use tracing::{Instrument, info, info_span};

use fitplan_types::generation::{GenerationError, GenerationRequest, SamplingParams};
use fitplan_types::plan::PlanResult;
use fitplan_types::user::UserRequest;

use crate::generation::BoxPlanGenerator;
use crate::prompt::PromptBuilder;
use crate::repair;

/// Turns user attributes into a (best-effort) structured fitness plan.
pub struct PlanService {
    generator: BoxPlanGenerator,
    sampling: SamplingParams,
}

impl PlanService {
    pub fn new(generator: BoxPlanGenerator, sampling: SamplingParams) -> Self {
        Self {
            generator,
            sampling,
        }
    }

    /// Build the prompt, run the model and repair its output.
    ///
    /// Generation errors propagate unchanged. Unparseable output does not:
    /// it comes back as [`PlanResult::RawFallback`].
    pub async fn generate_plan(&self, user: &UserRequest) -> Result<PlanResult, GenerationError> {
        let request = GenerationRequest {
            prompt: PromptBuilder::build(user),
            sampling: self.sampling.clone(),
        };

        let span = info_span!(
            "gen_ai.generate",
            gen_ai.system = self.generator.name(),
            gen_ai.request.model = self.generator.model(),
            gen_ai.request.max_tokens = request.sampling.max_new_tokens,
            gen_ai.request.temperature = request.sampling.temperature,
            gen_ai.request.top_p = request.sampling.top_p,
        );

        let output = self.generator.generate(&request).instrument(span).await?;

        let plan = repair::repair(&output.text);
        info!(
            output_chars = output.text.len(),
            generated_tokens = ?output.generated_tokens,
            parsed = plan.is_parsed(),
            "Model output repaired"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use fitplan_types::generation::GenerationOutput;
    use serde_json::json;

    use crate::generation::PlanGenerator;

    /// Returns a canned reply and records the prompts it was given.
    struct CannedGenerator {
        reply: Result<String, ()>,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<GenerationRequest>>>,
    }

    impl PlanGenerator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-model"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationOutput, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(GenerationOutput::text(text.clone())),
                Err(()) => Err(GenerationError::Unavailable("out of memory".to_string())),
            }
        }
    }

    type Recorded = Arc<Mutex<Vec<GenerationRequest>>>;

    fn service(reply: Result<&str, ()>) -> (PlanService, Arc<AtomicUsize>, Recorded) {
        let calls = Arc::new(AtomicUsize::new(0));
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let generator = CannedGenerator {
            reply: reply.map(str::to_string),
            calls: calls.clone(),
            prompts: prompts.clone(),
        };
        let svc = PlanService::new(BoxPlanGenerator::new(generator), SamplingParams::default());
        (svc, calls, prompts)
    }

    fn user() -> UserRequest {
        UserRequest {
            age: 25,
            height: 170.0,
            weight: 65.0,
            bmi: 22.5,
            activity_level: "active".to_string(),
            fitness_goal: "fat loss".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_plan_parses_repaired_output() {
        let (svc, calls, _) = service(Ok(r#""day1": "run": "5k"}}"#));
        let plan = svc.generate_plan(&user()).await.unwrap();
        assert_eq!(plan, PlanResult::Parsed(json!({"day1": {"run": "5k"}})));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_plan_falls_back_on_garbage() {
        let (svc, _, _) = service(Ok("no plan today"));
        let plan = svc.generate_plan(&user()).await.unwrap();
        assert_eq!(plan, PlanResult::raw_fallback("{no plan today}"));
    }

    #[tokio::test]
    async fn test_generate_plan_sends_prompt_and_sampling() {
        let (svc, _, prompts) = service(Ok("{}"));
        svc.generate_plan(&user()).await.unwrap();

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].prompt, PromptBuilder::build(&user()));
        assert_eq!(prompts[0].sampling, SamplingParams::default());
    }

    #[tokio::test]
    async fn test_generate_plan_propagates_generation_error() {
        let (svc, calls, _) = service(Err(()));
        let err = svc.generate_plan(&user()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Unavailable(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
