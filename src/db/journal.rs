use crate::forms::JournalQuery;
use crate::models;
use crate::services::JournalStats;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::Instrument;

const COLUMNS: &str = "id, user_id, entry_date, daily_summary, journal_content, mode, \
                       questions, answers, tokens_used, created_at, updated_at";

pub async fn insert(
    pool: &PgPool,
    entry: models::JournalEntry,
) -> Result<models::JournalEntry, String> {
    let query_span = tracing::info_span!("Saving journal entry into the database");
    sqlx::query_as::<_, models::JournalEntry>(&format!(
        r#"
        INSERT INTO journal_entry (
            user_id,
            entry_date,
            daily_summary,
            journal_content,
            mode,
            questions,
            answers,
            tokens_used,
            created_at,
            updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&entry.user_id)
    .bind(entry.entry_date)
    .bind(&entry.daily_summary)
    .bind(&entry.journal_content)
    .bind(entry.mode)
    .bind(&entry.questions)
    .bind(&entry.answers)
    .bind(entry.tokens_used)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::JournalEntry>, String> {
    tracing::info!("Fetch journal entry {}", id);
    sqlx::query_as::<_, models::JournalEntry>(&format!(
        "SELECT {COLUMNS} FROM journal_entry WHERE id = $1 LIMIT 1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch journal entry, error: {:?}", e);
        "Could not fetch data".to_string()
    })
}

/// Newest entry dates first.
pub async fn fetch_recent(
    pool: &PgPool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<models::JournalEntry>, String> {
    let query_span = tracing::info_span!("Fetch recent journal entries by user id.");
    sqlx::query_as::<_, models::JournalEntry>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM journal_entry
        WHERE user_id = $1
        ORDER BY entry_date DESC, created_at DESC
        LIMIT $2
        "#
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch journal entries, error: {:?}", e);
        "Could not fetch data".to_string()
    })
}

/// LIKE wildcards in user input match literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub async fn search(
    pool: &PgPool,
    user_id: &str,
    query: &JournalQuery,
) -> Result<Vec<models::JournalEntry>, String> {
    let query_span = tracing::info_span!("Search journal entries.");
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM journal_entry WHERE user_id = "));
    builder.push_bind(user_id);

    if let Some(term) = query.search_term() {
        let pattern = like_pattern(term);
        builder
            .push(" AND (daily_summary ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR journal_content ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(mode) = query.mode {
        builder.push(" AND mode = ").push_bind(mode);
    }
    builder
        .push(" ORDER BY entry_date DESC, created_at DESC LIMIT ")
        .push_bind(query.limit);

    builder
        .build_query_as::<models::JournalEntry>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search journal entries, error: {:?}", e);
            "Could not fetch data".to_string()
        })
}

/// `recent_since` bounds `recent_entries`, inclusive.
pub async fn stats(
    pool: &PgPool,
    user_id: &str,
    recent_since: NaiveDate,
) -> Result<JournalStats, String> {
    let query_span = tracing::info_span!("Aggregate journal statistics.");
    sqlx::query_as::<_, JournalStats>(
        r#"
        SELECT
            COUNT(*) AS total_entries,
            COUNT(*) FILTER (WHERE mode = 'quick') AS quick_entries,
            COUNT(*) FILTER (WHERE mode = 'detailed') AS detailed_entries,
            COUNT(*) FILTER (WHERE entry_date >= $2) AS recent_entries,
            COALESCE(SUM(tokens_used), 0)::BIGINT AS total_tokens
        FROM journal_entry
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .bind(recent_since)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to aggregate journal statistics, error: {:?}", e);
        "Could not fetch data".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("walk"), "%walk%");
    }
}
