use crate::forms::{AssistantReply, AssistantRequest, ResponseKind};
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::AiService;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

fn check_limits(form: &AssistantRequest) -> Result<()> {
    form.validate()
        .map_err(|errors| JsonResponse::<AssistantReply>::build().form_error(errors))
}

/// Validates the body and returns its trimmed summary.
fn require_summary(form: &AssistantRequest) -> Result<&str> {
    check_limits(form)?;
    form.summary().ok_or_else(|| {
        JsonResponse::<AssistantReply>::build().bad_request("Daily summary is required")
    })
}

#[tracing::instrument(name = "Generate reflection questions.", skip(form))]
#[post("/generate-questions")]
pub async fn questions_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<AssistantRequest>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    let summary = require_summary(&form)?;
    let outcome = ai.generate_reflection_questions(summary, form.mode).await;

    Ok(web::Json(AssistantReply::questions(outcome)))
}

#[tracing::instrument(name = "Generate live insights.", skip(form))]
#[post("/generate-live-insights")]
pub async fn insights_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<AssistantRequest>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    check_limits(&form)?;
    let (Some(summary), Some(content)) = (form.summary(), form.content()) else {
        return Err(JsonResponse::<AssistantReply>::build()
            .bad_request("Both daily summary and journal content are required"));
    };
    let outcome = ai.enhance_journal_entry(summary, content, form.mode).await;

    Ok(web::Json(AssistantReply::insights(outcome)))
}

/// `type` picks the operation: `summary` (default), `content` or `mood`.
#[tracing::instrument(name = "Generate assistant response.", skip(form))]
#[post("/generate-ai-response")]
pub async fn response_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<AssistantRequest>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    let summary = require_summary(&form)?;
    let kind = ResponseKind::parse(form.kind.as_deref()).ok_or_else(|| {
        JsonResponse::<AssistantReply>::build().bad_request("Invalid response type")
    })?;

    let reply = match kind {
        ResponseKind::Summary => {
            AssistantReply::summary(ai.generate_journal_summary(summary, form.mode).await)
        }
        ResponseKind::Content => AssistantReply::assistant_response(
            ai.generate_assistant_response(summary, &form.journal_content, form.mode)
                .await,
        ),
        ResponseKind::Mood => AssistantReply::assistant_response(
            ai.generate_mood_response(summary, &form.journal_content, form.mood.trim(), form.mode)
                .await,
        ),
    };

    Ok(web::Json(reply))
}

#[tracing::instrument(name = "Generate conversational questions.", skip(form))]
#[post("/generate-ai-questions")]
pub async fn conversational_questions_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<AssistantRequest>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    let summary = require_summary(&form)?;
    let outcome = ai.generate_conversational_questions(summary, form.mode).await;

    Ok(web::Json(AssistantReply::questions(outcome)))
}

#[tracing::instrument(name = "Generate conversational summary.", skip(form))]
#[post("/generate-journal-summary")]
pub async fn conversational_summary_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<AssistantRequest>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    let summary = require_summary(&form)?;
    let outcome = ai
        .generate_conversational_summary(summary, &form.user_answers, form.mode)
        .await;

    Ok(web::Json(AssistantReply::summary(outcome)))
}

#[tracing::instrument(name = "Compose journal entry.", skip(form))]
#[post("/compose-journal-entry")]
pub async fn compose_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<AssistantRequest>,
    ai: web::Data<AiService>,
) -> Result<impl Responder> {
    let summary = require_summary(&form)?;
    if form.user_answers.len() > form.ai_questions.len() {
        return Err(JsonResponse::<AssistantReply>::build()
            .bad_request("More answers than questions"));
    }

    let date = chrono::Local::now().date_naive().format("%B %-d, %Y").to_string();
    let outcome = ai
        .compose_journal_entry(summary, &form.ai_questions, &form.user_answers, &date, form.mode)
        .await;

    Ok(web::Json(AssistantReply::journal_entry(outcome)))
}
