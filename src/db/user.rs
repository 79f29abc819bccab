use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

const COLUMNS: &str = "id, email, first_name, last_name, role, created_at, last_login";

/// Stores the identity-provider view of the user and stamps `last_login`.
pub async fn record_login(pool: &PgPool, user: &models::User) -> Result<models::Profile, String> {
    let query_span = tracing::info_span!("Recording user login");
    sqlx::query_as::<_, models::Profile>(&format!(
        r#"
        INSERT INTO users (id, email, first_name, last_name, role, created_at, last_login)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        ON CONFLICT (id) DO UPDATE
        SET email = EXCLUDED.email,
            first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            role = EXCLUDED.role,
            last_login = EXCLUDED.last_login
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.role)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to record login".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<models::Profile>, String> {
    tracing::info!("Fetch profile {}", id);
    sqlx::query_as::<_, models::Profile>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch profile, error: {:?}", e);
            "Could not fetch data".to_string()
        })
}
