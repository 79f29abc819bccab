use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, post, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Upserts the caller's profile from the resolved identity.
#[tracing::instrument(name = "Record login.")]
#[post("/login")]
pub async fn login_handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::user::record_login(pg_pool.get_ref(), &user)
        .await
        .map(|profile| JsonResponse::build().set_item(profile).ok("Login recorded"))
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get profile.")]
#[get("/profile")]
pub async fn profile_handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::user::fetch(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<models::Profile>::build().internal_server_error(err))?
        .map(|profile| JsonResponse::build().set_item(profile).ok("OK"))
        .ok_or_else(|| JsonResponse::<models::Profile>::build().not_found("Profile not found"))
}
