//! Generation orchestrator - runs one request through the single slot.
//!
//! Flow: claim the slot (CAS) -> clear prior result -> build prompt ->
//! call the text generator -> store the settled result -> release the slot.
//! Service failures settle as a fixed placeholder result, never as an
//! error to the caller.

use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::prompts::build_generation_prompt;
use crate::llm_client::TextGenerator;
use crate::models::form::GenerationForm;
use crate::state::GenerationState;

/// Result stored when the generation call fails. Shown to the user
/// verbatim; diagnostic detail goes to the operator log.
pub const GENERATION_FAILED_RESULT: &str = "Error generating resume. See console for details.";

/// Runs one generation request against the shared slot.
///
/// At most one invocation can be in flight: a caller that loses the
/// compare-and-set gets `AppError::GenerationInFlight` and the in-flight
/// request is untouched. The slot is always released when the request
/// settles, success or failure.
pub async fn run_generation(
    state: &GenerationState,
    llm: &dyn TextGenerator,
    form: GenerationForm,
) -> Result<String, AppError> {
    if !state.try_begin(form.clone()) {
        return Err(AppError::GenerationInFlight);
    }

    info!("Generating resume for company {:?}", form.company_name);
    let prompt = build_generation_prompt(&form);

    let raw = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Generation call failed: {e}");
            GENERATION_FAILED_RESULT.to_string()
        }
    };

    state.finish(raw.clone());
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "upstream exploded".to_string(),
            })
        }
    }

    /// Generator that records the prompt it was handed.
    struct CapturingGenerator(std::sync::Mutex<String>);

    #[async_trait]
    impl TextGenerator for CapturingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.0.lock().unwrap() = prompt.to_string();
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn test_success_stores_and_returns_the_result() {
        let state = GenerationState::new();
        let raw = run_generation(
            &state,
            &FixedGenerator("1. Cover Letter\nDear Sir"),
            GenerationForm::default(),
        )
        .await
        .unwrap();
        assert_eq!(raw, "1. Cover Letter\nDear Sir");
        assert_eq!(state.raw(), raw);
        assert!(!state.is_generating());
    }

    #[tokio::test]
    async fn test_failure_settles_as_placeholder_and_releases_slot() {
        let state = GenerationState::new();
        let raw = run_generation(&state, &FailingGenerator, GenerationForm::default())
            .await
            .unwrap();
        assert_eq!(raw, "Error generating resume. See console for details.");
        assert_eq!(state.raw(), raw);
        assert!(!state.is_generating());
    }

    #[tokio::test]
    async fn test_second_request_while_busy_is_rejected() {
        let state = GenerationState::new();
        // Simulate an in-flight generation holding the slot.
        assert!(state.try_begin(GenerationForm::default()));

        let err = run_generation(&state, &FixedGenerator("late"), GenerationForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GenerationInFlight));
        // The in-flight slot is untouched by the loser.
        assert!(state.is_generating());
        assert!(state.raw().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_is_built_from_the_submitted_form() {
        let state = GenerationState::new();
        let generator = CapturingGenerator(std::sync::Mutex::new(String::new()));
        let form = GenerationForm {
            company_name: "Initech".to_string(),
            ..GenerationForm::default()
        };
        run_generation(&state, &generator, form).await.unwrap();
        let prompt = generator.0.lock().unwrap();
        assert!(prompt.contains("Initech"));
        assert!(prompt.contains("1. Tailored Cover Letter"));
    }

    #[tokio::test]
    async fn test_new_request_replaces_the_previous_result() {
        let state = GenerationState::new();
        run_generation(&state, &FixedGenerator("first"), GenerationForm::default())
            .await
            .unwrap();
        run_generation(&state, &FixedGenerator("second"), GenerationForm::default())
            .await
            .unwrap();
        assert_eq!(state.raw(), "second");
    }
}
