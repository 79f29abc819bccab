use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One mood check-in per user and calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MoodEntry {
    pub id: i32,
    pub user_id: String,
    pub entry_date: NaiveDate,
    pub mood: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
