use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoodForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    #[validate(pattern = r"\S")]
    pub mood: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MoodForm {
    /// Blank notes are stored as NULL.
    pub fn notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyticsQuery {
    #[serde(default = "default_days")]
    #[validate(minimum = 1)]
    #[validate(maximum = 365)]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}
