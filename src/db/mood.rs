use crate::models;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::Instrument;

const COLUMNS: &str = "id, user_id, entry_date, mood, notes, created_at, updated_at";

/// One row per user and day: a second check-in replaces mood and notes.
pub async fn upsert(
    pool: &PgPool,
    user_id: &str,
    entry_date: NaiveDate,
    mood: &str,
    notes: Option<&str>,
) -> Result<models::MoodEntry, String> {
    let query_span = tracing::info_span!("Saving mood check-in into the database");
    sqlx::query_as::<_, models::MoodEntry>(&format!(
        r#"
        INSERT INTO mood_entry (user_id, entry_date, mood, notes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        ON CONFLICT (user_id, entry_date) DO UPDATE
        SET mood = EXCLUDED.mood,
            notes = EXCLUDED.notes,
            updated_at = NOW()
        RETURNING {COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(entry_date)
    .bind(mood)
    .bind(notes)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to save mood".to_string()
    })
}

/// Entries dated `start..=end`, oldest first.
pub async fn fetch_range(
    pool: &PgPool,
    user_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<models::MoodEntry>, String> {
    let query_span = tracing::info_span!("Fetch mood entries by date range.");
    sqlx::query_as::<_, models::MoodEntry>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM mood_entry
        WHERE user_id = $1 AND entry_date >= $2 AND entry_date <= $3
        ORDER BY entry_date ASC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch mood entries, error: {:?}", e);
        "Could not fetch data".to_string()
    })
}
