use crate::helpers::JsonResponse;
use crate::services::quote_of_the_day;
use actix_web::{get, Responder, Result};

#[tracing::instrument(name = "Quote of the day.")]
#[get("/quote")]
pub async fn quote_handler() -> Result<impl Responder> {
    let quote = quote_of_the_day(chrono::Local::now().date_naive());
    Ok(JsonResponse::build().set_item(quote).ok("OK"))
}
