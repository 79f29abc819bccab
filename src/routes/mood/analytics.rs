use crate::db;
use crate::forms::AnalyticsQuery;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{mood_counts, DateRange, MoodCount};
use actix_web::{get, web, Responder, Result};
use serde::Serialize;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct MoodAnalytics {
    pub success: bool,
    pub mood_data: Vec<models::MoodEntry>,
    pub total_entries: usize,
    pub date_range: DateRange,
    pub mood_counts: Vec<MoodCount>,
}

#[tracing::instrument(name = "Mood analytics.")]
#[get("/analytics")]
pub async fn analytics_handler(
    query: web::Query<AnalyticsQuery>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = query.validate() {
        return Err(JsonResponse::<MoodAnalytics>::build().form_error(errors));
    }

    let date_range = DateRange::ending(chrono::Local::now().date_naive(), query.days);
    let mood_data = db::mood::fetch_range(pg_pool.get_ref(), &user.id, date_range.start, date_range.end)
        .await
        .map_err(|err| JsonResponse::<MoodAnalytics>::build().internal_server_error(err))?;

    Ok(web::Json(MoodAnalytics {
        success: true,
        total_entries: mood_data.len(),
        mood_counts: mood_counts(&mood_data),
        mood_data,
        date_range,
    }))
}
