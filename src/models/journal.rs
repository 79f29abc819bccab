use crate::models::Mode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JournalEntry {
    pub id: i32,
    pub user_id: String,
    pub entry_date: NaiveDate,
    pub daily_summary: String,
    pub journal_content: String,
    pub mode: Mode,
    /// `answers[i]` replies to `questions[i]`.
    pub questions: Json<Vec<String>>,
    pub answers: Json<Vec<String>>,
    pub tokens_used: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(user_id: String, entry_date: NaiveDate, mode: Mode) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            entry_date,
            daily_summary: String::new(),
            journal_content: String::new(),
            mode,
            questions: Json(vec![]),
            answers: Json(vec![]),
            tokens_used: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
