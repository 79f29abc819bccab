use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{quote_of_the_day, AiService, JournalStats, Quote};
use actix_web::{get, web, Responder, Result};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;

const RECENT_ENTRIES: i64 = 5;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub success: bool,
    pub recent_entries: Vec<models::JournalEntry>,
    /// Newest first.
    pub recent_moods: Vec<models::MoodEntry>,
    pub quote: Quote,
    pub ai_available: bool,
}

#[tracing::instrument(name = "Dashboard.")]
#[get("/dashboard")]
pub async fn dashboard_handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    let today = chrono::Local::now().date_naive();
    let window = JournalStats::recent_window(today);

    let (entries, moods) = futures::try_join!(
        db::journal::fetch_recent(pg_pool.get_ref(), &user.id, RECENT_ENTRIES),
        db::mood::fetch_range(pg_pool.get_ref(), &user.id, window.start, window.end),
    )
    .map_err(|err| JsonResponse::<Dashboard>::build().internal_server_error(err))?;

    let mut recent_moods = moods;
    recent_moods.reverse();

    Ok(web::Json(Dashboard {
        success: true,
        recent_entries: entries,
        recent_moods,
        quote: quote_of_the_day(today),
        ai_available: ai.is_available(),
    }))
}
