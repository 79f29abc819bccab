//! Reflective text generation with a deterministic fallback.
//!
//! Every operation issues at most one completion request. When no provider is
//! configured, or the request fails in any way, the operation returns its
//! canned fallback instead; nothing is retried and no error reaches the caller.

mod error;
pub mod fallback;
pub mod prompts;
mod provider;

pub use error::AiError;
pub use provider::{AiProvider, Completion, CompletionRequest, OpenAiProvider};

use crate::configuration::AiSettings;
use crate::models::Mode;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Which branch produced an operation's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOutcome<T> {
    Generated { content: T, tokens: u32 },
    Fallback { content: T },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Generated,
    Fallback,
}

impl<T> AiOutcome<T> {
    pub fn content(&self) -> &T {
        match self {
            Self::Generated { content, .. } | Self::Fallback { content } => content,
        }
    }

    /// Provider-reported total tokens; always 0 for fallback content.
    pub fn tokens(&self) -> u32 {
        match self {
            Self::Generated { tokens, .. } => *tokens,
            Self::Fallback { .. } => 0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn source(&self) -> Source {
        match self {
            Self::Generated { .. } => Source::Generated,
            Self::Fallback { .. } => Source::Fallback,
        }
    }

    pub fn into_parts(self) -> (T, u32) {
        let tokens = self.tokens();
        match self {
            Self::Generated { content, .. } | Self::Fallback { content } => (content, tokens),
        }
    }
}

/// Splits a reply into trimmed, non-blank lines.
fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_block(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Availability is decided once, at construction.
#[derive(Clone)]
pub struct AiService {
    provider: Option<Arc<dyn AiProvider>>,
}

impl fmt::Debug for AiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiService")
            .field("model", &self.model())
            .finish()
    }
}

impl AiService {
    pub fn new(settings: &AiSettings) -> Self {
        let Some(api_key) = settings.credential() else {
            tracing::warn!("AI provider credential not configured, AI features will use fallbacks");
            return Self::unavailable();
        };

        match OpenAiProvider::new(settings, api_key) {
            Ok(provider) => {
                tracing::info!(model = %provider.model(), "AI provider configured");
                Self::with_provider(Arc::new(provider))
            }
            Err(err) => {
                tracing::error!("AI provider could not be initialised, using fallbacks: {err}");
                Self::unavailable()
            }
        }
    }

    pub fn with_provider(provider: Arc<dyn AiProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn model(&self) -> Option<&str> {
        self.provider.as_deref().map(|provider| provider.model())
    }

    async fn request(&self, task: &'static str, request: CompletionRequest) -> Option<Completion> {
        let provider = self.provider.as_ref()?;
        match provider.complete(&request).await {
            Ok(completion) => Some(completion),
            Err(err) => {
                tracing::warn!(task, provider = provider.name(), "AI error, serving fallback: {err}");
                None
            }
        }
    }

    async fn lines<F>(&self, task: &'static str, request: CompletionRequest, fallback: F) -> AiOutcome<Vec<String>>
    where
        F: FnOnce() -> Vec<String>,
    {
        if let Some(completion) = self.request(task, request).await {
            let content = parse_lines(&completion.text);
            if !content.is_empty() {
                return AiOutcome::Generated {
                    content,
                    tokens: completion.total_tokens,
                };
            }
            tracing::warn!(task, "AI reply had no usable lines, serving fallback");
        }
        AiOutcome::Fallback { content: fallback() }
    }

    async fn block<F>(&self, task: &'static str, request: CompletionRequest, fallback: F) -> AiOutcome<String>
    where
        F: FnOnce() -> String,
    {
        if let Some(completion) = self.request(task, request).await {
            if let Some(content) = parse_block(&completion.text) {
                return AiOutcome::Generated {
                    content,
                    tokens: completion.total_tokens,
                };
            }
            tracing::warn!(task, "AI reply was blank, serving fallback");
        }
        AiOutcome::Fallback { content: fallback() }
    }

    #[tracing::instrument(name = "Generate reflection questions.", skip(self, daily_summary))]
    pub async fn generate_reflection_questions(&self, daily_summary: &str, mode: Mode) -> AiOutcome<Vec<String>> {
        self.lines(
            "reflection_questions",
            prompts::reflection_questions(daily_summary, mode),
            || fallback::reflection_questions(mode),
        )
        .await
    }

    #[tracing::instrument(name = "Enhance journal entry.", skip(self, daily_summary, journal_content))]
    pub async fn enhance_journal_entry(
        &self,
        daily_summary: &str,
        journal_content: &str,
        mode: Mode,
    ) -> AiOutcome<Vec<String>> {
        self.lines(
            "insights",
            prompts::insights(daily_summary, journal_content, mode),
            || fallback::insights(mode),
        )
        .await
    }

    #[tracing::instrument(name = "Generate journal summary.", skip(self, daily_summary))]
    pub async fn generate_journal_summary(&self, daily_summary: &str, mode: Mode) -> AiOutcome<String> {
        self.block(
            "journal_summary",
            prompts::journal_summary(daily_summary, mode),
            || fallback::journal_summary(daily_summary, mode),
        )
        .await
    }

    #[tracing::instrument(name = "Generate assistant response.", skip(self, daily_summary, journal_content))]
    pub async fn generate_assistant_response(
        &self,
        daily_summary: &str,
        journal_content: &str,
        mode: Mode,
    ) -> AiOutcome<String> {
        self.block(
            "assistant_response",
            prompts::assistant_response(daily_summary, journal_content),
            || fallback::assistant_response(mode),
        )
        .await
    }

    #[tracing::instrument(name = "Generate mood response.", skip(self, daily_summary, journal_content))]
    pub async fn generate_mood_response(
        &self,
        daily_summary: &str,
        journal_content: &str,
        mood: &str,
        mode: Mode,
    ) -> AiOutcome<String> {
        self.block(
            "mood_response",
            prompts::mood_response(daily_summary, journal_content, mood),
            || fallback::mood_response(mood, mode),
        )
        .await
    }

    #[tracing::instrument(name = "Generate conversational questions.", skip(self, daily_summary))]
    pub async fn generate_conversational_questions(
        &self,
        daily_summary: &str,
        mode: Mode,
    ) -> AiOutcome<Vec<String>> {
        self.lines(
            "conversational_questions",
            prompts::conversational_questions(daily_summary, mode),
            || fallback::conversational_questions(mode),
        )
        .await
    }

    #[tracing::instrument(name = "Generate conversational summary.", skip(self, daily_summary, user_answers))]
    pub async fn generate_conversational_summary(
        &self,
        daily_summary: &str,
        user_answers: &[String],
        mode: Mode,
    ) -> AiOutcome<String> {
        self.block(
            "conversational_summary",
            prompts::conversational_summary(daily_summary, user_answers, mode),
            || fallback::conversational_summary(daily_summary, user_answers, mode),
        )
        .await
    }

    /// First-person entry built from the summary and the answered questions.
    /// `date` is already formatted for display, e.g. "March 14, 2024".
    #[tracing::instrument(name = "Compose journal entry.", skip(self, daily_summary, questions, answers))]
    pub async fn compose_journal_entry(
        &self,
        daily_summary: &str,
        questions: &[String],
        answers: &[String],
        date: &str,
        mode: Mode,
    ) -> AiOutcome<String> {
        self.block(
            "journal_composition",
            prompts::journal_composition(daily_summary, questions, answers, date, mode),
            || fallback::journal_composition(daily_summary, questions, answers, date, mode),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ── Mock providers ───────────────────────────────

    struct MockAiProvider {
        response: String,
        tokens: u32,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl MockAiProvider {
        fn with_response(response: &str, tokens: u32) -> Arc<Self> {
            Arc::new(Self {
                response: response.to_string(),
                tokens,
                requests: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl AiProvider for MockAiProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AiError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(Completion {
                text: self.response.clone(),
                total_tokens: self.tokens,
            })
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl AiProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn model(&self) -> &str {
            "failing-model"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, AiError> {
            Err(AiError::Status {
                provider: "failing".to_string(),
                status: 429,
                body: "quota exceeded".to_string(),
            })
        }
    }

    const SUMMARY: &str = "Had a tough meeting but a good walk after";

    // ── Unavailable service ──────────────────────────

    #[test]
    fn missing_credential_means_unavailable() {
        let service = AiService::new(&AiSettings::default());
        assert!(!service.is_available());
        assert_eq!(service.model(), None);
    }

    #[test]
    fn credential_makes_service_available() {
        let settings = AiSettings {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let service = AiService::new(&settings);
        assert!(service.is_available());
        assert_eq!(service.model(), Some("gpt-4o-mini"));
    }

    #[tokio::test]
    async fn unavailable_quick_questions_are_the_four_fallbacks() {
        let service = AiService::unavailable();
        let outcome = service.generate_reflection_questions(SUMMARY, Mode::Quick).await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.tokens(), 0);
        assert_eq!(outcome.content(), &fallback::reflection_questions(Mode::Quick));
        assert_eq!(outcome.content().len(), 4);
    }

    #[tokio::test]
    async fn unavailable_operations_return_documented_fallbacks() {
        let service = AiService::unavailable();
        let answers = vec!["It went fine".to_string()];

        for mode in [Mode::Quick, Mode::Detailed] {
            let questions = service.generate_reflection_questions(SUMMARY, mode).await;
            assert_eq!(questions, AiOutcome::Fallback { content: fallback::reflection_questions(mode) });

            let insights = service.enhance_journal_entry(SUMMARY, "notes", mode).await;
            assert_eq!(insights, AiOutcome::Fallback { content: fallback::insights(mode) });

            let summary = service.generate_journal_summary(SUMMARY, mode).await;
            assert_eq!(summary, AiOutcome::Fallback { content: fallback::journal_summary(SUMMARY, mode) });

            let response = service.generate_assistant_response(SUMMARY, "notes", mode).await;
            assert_eq!(response, AiOutcome::Fallback { content: fallback::assistant_response(mode) });

            let mood = service.generate_mood_response(SUMMARY, "notes", "sad", mode).await;
            assert_eq!(mood, AiOutcome::Fallback { content: fallback::mood_response("sad", mode) });

            let conversational = service.generate_conversational_questions(SUMMARY, mode).await;
            assert_eq!(
                conversational,
                AiOutcome::Fallback { content: fallback::conversational_questions(mode) }
            );

            let recap = service.generate_conversational_summary(SUMMARY, &answers, mode).await;
            assert_eq!(
                recap,
                AiOutcome::Fallback { content: fallback::conversational_summary(SUMMARY, &answers, mode) }
            );
            assert_eq!(recap.tokens(), 0);
        }
    }

    #[tokio::test]
    async fn anxious_mood_fallback() {
        let service = AiService::unavailable();
        let outcome = service
            .generate_mood_response(SUMMARY, "Couldn't sleep", "anxious", Mode::Quick)
            .await;
        assert!(outcome.content().contains("What's underlying this anxiety?"));

        let unknown = service
            .generate_mood_response(SUMMARY, "Couldn't sleep", "restless", Mode::Quick)
            .await;
        assert_eq!(unknown.content(), fallback::GENERIC_MOOD_RESPONSE);
    }

    #[tokio::test]
    async fn conversational_summary_without_answers_omits_reflection_clause() {
        let service = AiService::unavailable();
        let outcome = service
            .generate_conversational_summary(SUMMARY, &[], Mode::Detailed)
            .await;
        assert!(!outcome.content().contains("reflected on your feelings"));
    }

    // ── Provider replies ─────────────────────────────

    #[tokio::test]
    async fn generated_lines_drop_blank_entries() {
        let provider = MockAiProvider::with_response(
            "\nWhat made the walk feel good?\n   \nHow did the meeting end?\n\n  What would you tell yourself this morning?  \n",
            87,
        );
        let service = AiService::with_provider(provider.clone());

        let outcome = service.generate_reflection_questions(SUMMARY, Mode::Quick).await;
        assert_eq!(outcome.source(), Source::Generated);
        assert_eq!(outcome.tokens(), 87);
        assert_eq!(
            outcome.content(),
            &vec![
                "What made the walk feel good?".to_string(),
                "How did the meeting end?".to_string(),
                "What would you tell yourself this morning?".to_string(),
            ]
        );
        assert!(outcome.content().iter().all(|line| !line.trim().is_empty()));

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 200);
        assert!(requests[0].prompt.contains(SUMMARY));
    }

    #[tokio::test]
    async fn generated_block_is_trimmed() {
        let provider = MockAiProvider::with_response("\n  That sounds like a lot to carry.  \n", 42);
        let service = AiService::with_provider(provider);

        let (content, tokens) = service
            .generate_assistant_response(SUMMARY, "notes", Mode::Detailed)
            .await
            .into_parts();
        assert_eq!(content, "That sounds like a lot to carry.");
        assert_eq!(tokens, 42);
    }

    #[tokio::test]
    async fn provider_error_degrades_to_fallback() {
        let service = AiService::with_provider(Arc::new(FailingProvider));
        assert!(service.is_available());

        let outcome = service.generate_conversational_questions(SUMMARY, Mode::Detailed).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.tokens(), 0);
        assert_eq!(outcome.content().len(), 6);

        let summary = service.generate_journal_summary(SUMMARY, Mode::Quick).await;
        assert_eq!(summary.content(), &fallback::journal_summary(SUMMARY, Mode::Quick));
    }

    #[tokio::test]
    async fn blank_reply_degrades_to_fallback() {
        let service = AiService::with_provider(MockAiProvider::with_response(" \n\n ", 12));

        let insights = service.enhance_journal_entry(SUMMARY, "notes", Mode::Quick).await;
        assert!(insights.is_fallback());
        assert_eq!(insights.tokens(), 0);

        let recap = service
            .generate_conversational_summary(SUMMARY, &["ok".to_string()], Mode::Quick)
            .await;
        assert!(recap.is_fallback());
    }

    #[tokio::test]
    async fn identical_inputs_are_requested_again() {
        let provider = MockAiProvider::with_response("A calm, steady day.", 30);
        let service = AiService::with_provider(provider.clone());

        service.generate_journal_summary(SUMMARY, Mode::Quick).await;
        service.generate_journal_summary(SUMMARY, Mode::Quick).await;

        assert_eq!(provider.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn composition_falls_back_to_users_own_words() {
        let service = AiService::unavailable();
        let questions = vec!["What helped?".to_string()];
        let answers = vec!["The walk.".to_string()];

        let outcome = service
            .compose_journal_entry(SUMMARY, &questions, &answers, "March 14, 2024", Mode::Detailed)
            .await;
        assert!(outcome.is_fallback());
        assert_eq!(
            outcome.content(),
            &format!("March 14, 2024\n\n{SUMMARY}\n\nWhat helped?\nThe walk.")
        );
    }
}
