use crate::models::Mode;
use crate::services::ai::{AiOutcome, Source};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body shared by the `/api/*` generation routes; each route reads the
/// fields it needs. Blank required fields are reported by the route.
#[derive(Default, Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct AssistantRequest {
    #[validate(max_length = 10000)]
    pub daily_summary: String,
    #[validate(max_length = 20000)]
    pub journal_content: String,
    #[validate(max_length = 50)]
    pub mood: String,
    pub mode: Mode,
    #[validate(max_items = 20)]
    pub user_answers: Vec<String>,
    #[validate(max_items = 20)]
    pub ai_questions: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl AssistantRequest {
    /// Summary with surrounding whitespace removed, `None` when blank.
    pub fn summary(&self) -> Option<&str> {
        Some(self.daily_summary.trim()).filter(|summary| !summary.is_empty())
    }

    pub fn content(&self) -> Option<&str> {
        Some(self.journal_content.trim()).filter(|content| !content.is_empty())
    }
}

/// What `/api/generate-ai-response` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Summary,
    Content,
    Mood,
}

impl ResponseKind {
    /// Missing `type` means a summary.
    pub fn parse(kind: Option<&str>) -> Option<Self> {
        match kind.map(str::trim) {
            None | Some("summary") => Some(Self::Summary),
            Some("content") => Some(Self::Content),
            Some("mood") => Some(Self::Mood),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_entry: Option<String>,
    pub tokens_used: u32,
    pub source: Source,
}

impl AssistantReply {
    fn new<T>(outcome: &AiOutcome<T>) -> Self {
        Self {
            success: true,
            questions: None,
            insights: None,
            summary: None,
            assistant_response: None,
            journal_entry: None,
            tokens_used: outcome.tokens(),
            source: outcome.source(),
        }
    }

    pub fn questions(outcome: AiOutcome<Vec<String>>) -> Self {
        let mut reply = Self::new(&outcome);
        reply.questions = Some(outcome.into_parts().0);
        reply
    }

    pub fn insights(outcome: AiOutcome<Vec<String>>) -> Self {
        let mut reply = Self::new(&outcome);
        reply.insights = Some(outcome.into_parts().0);
        reply
    }

    pub fn summary(outcome: AiOutcome<String>) -> Self {
        let mut reply = Self::new(&outcome);
        reply.summary = Some(outcome.into_parts().0);
        reply
    }

    pub fn assistant_response(outcome: AiOutcome<String>) -> Self {
        let mut reply = Self::new(&outcome);
        reply.assistant_response = Some(outcome.into_parts().0);
        reply
    }

    pub fn journal_entry(outcome: AiOutcome<String>) -> Self {
        let mut reply = Self::new(&outcome);
        reply.journal_entry = Some(outcome.into_parts().0);
        reply
    }
}
