use crate::models::MoodEntry;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Per-user journal totals, computed in one aggregate query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct JournalStats {
    pub total_entries: i64,
    pub quick_entries: i64,
    pub detailed_entries: i64,
    /// Entries dated within the last 7 days.
    pub recent_entries: i64,
    pub total_tokens: i64,
}

/// Span of "recent" for journal stats and the dashboard mood strip.
pub const RECENT_DAYS: i64 = 7;

impl JournalStats {
    pub fn recent_window(today: NaiveDate) -> DateRange {
        DateRange::ending(today, RECENT_DAYS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `days` back from `today`, both ends inclusive.
    pub fn ending(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - Duration::days(days),
            end: today,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// Occurrences per label, most frequent first; ties ordered by label.
pub fn mood_counts(entries: &[MoodEntry]) -> Vec<MoodCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.mood.as_str()).or_default() += 1;
    }

    let mut counts: Vec<MoodCount> = counts
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood: mood.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.mood.cmp(&b.mood)));
    counts
}
