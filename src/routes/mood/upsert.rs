use crate::db;
use crate::forms::MoodForm;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Save mood check-in.")]
#[post("")]
pub async fn upsert_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<MoodForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::MoodEntry>::build().form_error(errors));
    }

    let today = chrono::Local::now().date_naive();
    db::mood::upsert(pg_pool.get_ref(), &user.id, today, form.mood.trim(), form.notes())
        .await
        .map(|entry| {
            JsonResponse::build()
                .set_id(entry.id)
                .set_item(entry)
                .ok("Mood saved successfully!")
        })
        .map_err(|err| JsonResponse::<models::MoodEntry>::build().internal_server_error(err))
}
