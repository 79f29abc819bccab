use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::JournalStats;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Journal analytics.")]
#[get("/analytics")]
pub async fn analytics_handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let window = JournalStats::recent_window(chrono::Local::now().date_naive());

    db::journal::stats(pg_pool.get_ref(), &user.id, window.start)
        .await
        .map(|stats| JsonResponse::build().set_item(stats).ok("OK"))
        .map_err(|err| JsonResponse::<JournalStats>::build().internal_server_error(err))
}
