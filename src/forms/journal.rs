use crate::models;
use crate::models::Mode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use sqlx::types::Json;

#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JournalForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 10000)]
    pub daily_summary: String,
    #[serde(default)]
    #[validate(max_items = 20)]
    pub ai_questions: Vec<String>,
    #[serde(default)]
    #[validate(max_items = 20)]
    pub user_answers: Vec<String>,
    /// Generated on submission when left empty.
    #[serde(default)]
    pub ai_summary: String,
    #[serde(default)]
    pub mode: Mode,
}

impl JournalForm {
    /// `user_answers[i]` must reply to `ai_questions[i]`.
    pub fn check_answers(&self) -> Result<(), String> {
        if self.user_answers.len() > self.ai_questions.len() {
            return Err(format!(
                "Received {} answers for {} questions",
                self.user_answers.len(),
                self.ai_questions.len()
            ));
        }
        Ok(())
    }

    pub fn into_entry(self, user_id: String, entry_date: NaiveDate) -> models::JournalEntry {
        let mut entry = models::JournalEntry::new(user_id, entry_date, self.mode);
        entry.daily_summary = self.daily_summary;
        entry.journal_content = self.ai_summary;
        entry.questions = Json(self.ai_questions);
        entry.answers = Json(self.user_answers);
        entry
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JournalQuery {
    pub search: Option<String>,
    pub mode: Option<Mode>,
    #[serde(default = "default_limit")]
    #[validate(minimum = 1)]
    #[validate(maximum = 100)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

impl JournalQuery {
    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_answers_than_questions_is_rejected() {
        let form = JournalForm {
            daily_summary: "Rainy day".to_string(),
            ai_questions: vec!["How was it?".to_string()],
            user_answers: vec!["Wet".to_string(), "Cold".to_string()],
            ..Default::default()
        };
        assert!(form.check_answers().is_err());
    }

    #[test]
    fn unanswered_questions_are_allowed() {
        let form = JournalForm {
            daily_summary: "Rainy day".to_string(),
            ai_questions: vec!["How was it?".to_string(), "And then?".to_string()],
            user_answers: vec!["Wet".to_string()],
            ..Default::default()
        };
        assert!(form.check_answers().is_ok());

        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let entry = form.into_entry("u-1".to_string(), date);
        assert_eq!(entry.questions.len(), 2);
        assert_eq!(entry.answers.0, vec!["Wet".to_string()]);
        assert_eq!(entry.tokens_used, 0);
    }

    #[test]
    fn empty_summary_fails_validation() {
        let form: JournalForm = serde_json::from_str(r#"{"daily_summary": ""}"#).unwrap();
        assert!(form.validate().is_err());
        assert_eq!(form.mode, Mode::Quick);
    }

    #[test]
    fn query_defaults_and_bounds() {
        let query: JournalQuery = serde_json::from_str(r#"{"search": "  "}"#).unwrap();
        assert_eq!(query.limit, 50);
        assert_eq!(query.search_term(), None);
        assert!(query.validate().is_ok());

        let query: JournalQuery = serde_json::from_str(r#"{"limit": 500}"#).unwrap();
        assert!(query.validate().is_err());
    }
}
