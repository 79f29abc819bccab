use crate::db;
use crate::forms::JournalForm;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::AiService;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// Stores today's entry. Without a client-supplied `ai_summary` the journal
/// summary is generated here and its tokens are recorded on the entry.
#[tracing::instrument(name = "Add journal entry.", skip(form))]
#[post("")]
pub async fn add_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<JournalForm>,
    pg_pool: web::Data<PgPool>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::JournalEntry>::build().form_error(errors));
    }
    form.check_answers()
        .map_err(|msg| JsonResponse::<models::JournalEntry>::build().bad_request(msg))?;

    let form = form.into_inner();
    let today = chrono::Local::now().date_naive();
    let needs_summary = form.ai_summary.trim().is_empty();
    let mut entry = form.into_entry(user.id.clone(), today);

    if needs_summary {
        let (content, tokens) = ai
            .generate_journal_summary(&entry.daily_summary, entry.mode)
            .await
            .into_parts();
        entry.journal_content = content;
        entry.tokens_used = i32::try_from(tokens).unwrap_or(i32::MAX);
    }

    db::journal::insert(pg_pool.get_ref(), entry)
        .await
        .map(|entry| {
            tracing::info!("New journal entry {} has been saved", entry.id);
            JsonResponse::build()
                .set_id(entry.id)
                .set_item(entry)
                .ok("Journal entry created successfully!")
        })
        .map_err(|err| JsonResponse::<models::JournalEntry>::build().internal_server_error(err))
}
