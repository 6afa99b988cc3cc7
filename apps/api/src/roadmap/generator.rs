//! Roadmap generation pipeline: prompt → model call → extraction → fallback.

use tracing::{info, warn};

use crate::config::FailurePolicy;
use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::roadmap::extractor::extract_roadmap;
use crate::roadmap::fallback::fallback_roadmap;
use crate::roadmap::models::{RoadmapInput, RoadmapResult};
use crate::roadmap::prompts::build_roadmap_prompt;

/// Runs one roadmap generation.
///
/// Under `FailurePolicy::Fallback` this never fails: an unusable model answer
/// or a failed call yields the template roadmap. Under `Envelope` the failure
/// is returned for the handler to render.
pub async fn generate_roadmap(
    llm: &dyn CompletionClient,
    policy: FailurePolicy,
    input: &RoadmapInput,
) -> Result<RoadmapResult, AppError> {
    let prompt = build_roadmap_prompt(input);

    let text = match llm.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Gemini call failed: {e}");
            return match policy {
                FailurePolicy::Fallback => Ok(fallback_roadmap(&input.domain)),
                FailurePolicy::Envelope => Err(AppError::ExternalCall(e)),
            };
        }
    };
    info!("Gemini response received: {} chars", text.len());

    match extract_roadmap(&text) {
        Ok(roadmap) => {
            info!("Parsed roadmap from model response");
            Ok(roadmap)
        }
        Err(error) => {
            let preview: String = text.chars().take(200).collect();
            warn!("Failed to parse model response: {error}; preview: {preview}");
            match policy {
                FailurePolicy::Fallback => Ok(fallback_roadmap(&input.domain)),
                FailurePolicy::Envelope => Err(AppError::Extraction {
                    raw_response: text,
                    error,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Returns a canned answer and records every prompt it receives.
    struct ScriptedClient {
        answer: fn() -> Result<String, LlmError>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(answer: fn() -> Result<String, LlmError>) -> Self {
            Self {
                answer,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.answer)()
        }
    }

    fn input() -> RoadmapInput {
        RoadmapInput {
            domain: "Backend".to_string(),
            current_year: "2nd Year".to_string(),
            experience_level: "Beginner".to_string(),
        }
    }

    fn unavailable() -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            body: serde_json::json!({"error": "unavailable"}),
        })
    }

    #[tokio::test]
    async fn test_model_json_is_returned() {
        let client = ScriptedClient::new(|| {
            Ok("Here: {\"careerAdvice\": \"Learn SQL\", \"certifications\": []}".to_string())
        });
        let roadmap = generate_roadmap(&client, FailurePolicy::Fallback, &input())
            .await
            .unwrap();

        assert_eq!(roadmap.career_advice, "Learn SQL");
        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Domain: Backend"));
    }

    #[tokio::test]
    async fn test_call_failure_falls_back() {
        let client = ScriptedClient::new(unavailable);
        let roadmap = generate_roadmap(&client, FailurePolicy::Fallback, &input())
            .await
            .unwrap();
        assert_eq!(roadmap, fallback_roadmap("Backend"));
    }

    #[tokio::test]
    async fn test_call_failure_under_envelope_policy_is_error() {
        let client = ScriptedClient::new(unavailable);
        let err = generate_roadmap(&client, FailurePolicy::Envelope, &input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalCall(LlmError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_unparseable_answer_falls_back() {
        let client = ScriptedClient::new(|| Ok("I'm sorry, I can't do that.".to_string()));
        let roadmap = generate_roadmap(&client, FailurePolicy::Fallback, &input())
            .await
            .unwrap();
        assert_eq!(roadmap.certifications[0].name, "Backend Certification");
    }

    #[tokio::test]
    async fn test_unparseable_answer_under_envelope_policy_keeps_raw_text() {
        let client = ScriptedClient::new(|| Ok("No response".to_string()));
        let err = generate_roadmap(&client, FailurePolicy::Envelope, &input())
            .await
            .unwrap_err();
        match err {
            AppError::Extraction { raw_response, .. } => assert_eq!(raw_response, "No response"),
            other => panic!("expected extraction error, got {other:?}"),
        }
    }
}
