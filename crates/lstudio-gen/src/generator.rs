//! High-level generation operations
//!
//! [`Generator`] pairs a [`GenerationService`] with an output language and
//! exposes the three operations the application needs. Each call makes
//! exactly one service request; failures surface immediately.

use std::time::Instant;

use tracing::{info, warn};

use lstudio_core::{InteractiveExplanation, Language, RequestKind, Strategy};

use crate::error::GenerationError;
use crate::parse::parse_interactive;
use crate::prompt;
use crate::service::{GenerationService, ServiceRequest};

pub struct Generator<S> {
    service: S,
    language: Language,
}

impl<S: GenerationService> Generator<S> {
    pub fn new(service: S, language: Language) -> Self {
        Self { service, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Lesson plan for `title` taught with `strategy`, as Markdown-like text
    pub async fn generate_plan(
        &self,
        title: &str,
        strategy: &Strategy,
    ) -> Result<String, GenerationError> {
        let name = strategy.name(self.language);
        let request = ServiceRequest::text(prompt::plan_prompt(title.trim(), name, self.language));
        self.call(RequestKind::Plan, request).await
    }

    /// Plain-language explanation of `strategy`
    pub async fn explain_strategy(&self, strategy: &Strategy) -> Result<String, GenerationError> {
        let name = strategy.name(self.language);
        let request = ServiceRequest::text(prompt::strategy_prompt(name, self.language));
        self.call(RequestKind::StrategyExplanation, request).await
    }

    /// Step-by-step explanation of `title` taught with `strategy`
    pub async fn explain_interactively(
        &self,
        title: &str,
        strategy: &Strategy,
    ) -> Result<InteractiveExplanation, GenerationError> {
        let name = strategy.name(self.language);
        let request =
            ServiceRequest::json(prompt::interactive_prompt(title.trim(), name, self.language));
        let raw = self.call(RequestKind::LessonExplanation, request).await?;
        parse_interactive(&raw, name).inspect_err(|e| {
            warn!(strategy = strategy.id, "Rejected interactive explanation: {}", e);
        })
    }

    async fn call(
        &self,
        kind: RequestKind,
        request: ServiceRequest,
    ) -> Result<String, GenerationError> {
        let started = Instant::now();
        info!(%kind, model = self.service.model(), "Sending generation request");

        let result = self.service.generate(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(text) => info!(%kind, elapsed_ms, chars = text.len(), "Generation finished"),
            Err(e) => warn!(
                %kind,
                elapsed_ms,
                transient = e.is_transient(),
                "Generation failed: {}",
                e
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{six_hats_reply, ScriptedService};
    use lstudio_core::{find_strategy, StepIcon};

    fn six_hats() -> &'static Strategy {
        find_strategy("six-hats").unwrap()
    }

    #[tokio::test]
    async fn test_generate_plan_sends_one_text_request() {
        let generator = Generator::new(
            ScriptedService::new().with_reply("# Plan"),
            Language::English,
        );

        let plan = generator
            .generate_plan("  Plant life cycle ", six_hats())
            .await
            .unwrap();
        assert_eq!(plan, "# Plan");

        let requests = generator.service().requests();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].json);
        assert!(requests[0].prompt.contains("\"Plant life cycle\""));
        assert!(requests[0].prompt.contains("Six Thinking Hats"));
    }

    #[tokio::test]
    async fn test_prompt_uses_localized_strategy_name() {
        let generator = Generator::new(ScriptedService::new().with_reply("ok"), Language::Arabic);
        generator.explain_strategy(six_hats()).await.unwrap();
        let prompt = &generator.service().requests()[0].prompt;
        assert!(prompt.contains("القبعات الست"));
        assert!(prompt.contains("in Arabic"));
    }

    #[tokio::test]
    async fn test_failures_are_not_retried() {
        let generator = Generator::new(
            ScriptedService::new()
                .with_error(GenerationError::Transport("connection reset".into()))
                .with_reply("never reached"),
            Language::English,
        );

        let result = generator.generate_plan("Fractions", six_hats()).await;
        assert!(matches!(result, Err(GenerationError::Transport(_))));
        assert_eq!(generator.service().request_count(), 1);
    }

    #[tokio::test]
    async fn test_explain_interactively_requests_json_and_parses_steps() {
        let generator = Generator::new(
            ScriptedService::new().with_reply(six_hats_reply()),
            Language::English,
        );

        let exp = generator
            .explain_interactively("Plant life cycle", six_hats())
            .await
            .unwrap();
        assert_eq!(exp.strategy, "Six Thinking Hats");
        assert_eq!(exp.step_count(), 6);
        assert_eq!(exp.step_list().unwrap()[0].icon, StepIcon::WhiteHat);
        assert!(generator.service().requests()[0].json);
    }

    #[tokio::test]
    async fn test_explain_interactively_rejects_prose() {
        let generator = Generator::new(
            ScriptedService::new().with_reply("Here are the steps: ..."),
            Language::English,
        );
        let result = generator
            .explain_interactively("Plant life cycle", six_hats())
            .await;
        assert!(matches!(result, Err(GenerationError::NotAnObject)));
    }
}
