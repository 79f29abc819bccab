use crate::db;
use crate::forms::JournalQuery;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Get journal entry.")]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    db::journal::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::JournalEntry>::build().internal_server_error(err))
        .and_then(|entry| match entry {
            // someone else's entry is indistinguishable from a missing one
            Some(entry) if entry.user_id != user.id => Err(
                JsonResponse::<models::JournalEntry>::build().not_found("Journal entry not found"),
            ),
            Some(entry) => Ok(JsonResponse::build().set_item(entry).ok("OK")),
            None => Err(
                JsonResponse::<models::JournalEntry>::build().not_found("Journal entry not found"),
            ),
        })
}

#[tracing::instrument(name = "List journal entries.")]
#[get("")]
pub async fn list(
    query: web::Query<JournalQuery>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = query.validate() {
        return Err(JsonResponse::<models::JournalEntry>::build().form_error(errors));
    }

    db::journal::search(pg_pool.get_ref(), &user.id, &query)
        .await
        .map(|entries| JsonResponse::build().set_list(entries).ok("OK"))
        .map_err(|err| JsonResponse::<models::JournalEntry>::build().internal_server_error(err))
}
