use actix_web::error::{ErrorBadRequest, InternalError};
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T> {
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn to_json_response(self, success: bool, message: String) -> JsonResponse<T> {
        JsonResponse {
            success,
            message,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok<M: Into<String>>(self, message: M) -> web::Json<JsonResponse<T>> {
        web::Json(self.to_json_response(true, message.into()))
    }

    fn to_error(self, status: StatusCode, message: String) -> Error {
        let body = self.to_json_response(false, message.clone());
        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }

    pub fn bad_request<M: Into<String>>(self, message: M) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn form_error(self, errors: serde_valid::validation::Errors) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, errors.to_string())
    }

    pub fn unauthorized<M: Into<String>>(self, message: M) -> Error {
        self.to_error(StatusCode::UNAUTHORIZED, message.into())
    }

    pub fn not_found<M: Into<String>>(self, message: M) -> Error {
        self.to_error(StatusCode::NOT_FOUND, message.into())
    }

    pub fn internal_server_error<M: Into<String>>(self, message: M) -> Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Internal error".to_string()
        } else {
            message
        };
        self.to_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

/// Maps body decode failures to a 400 carrying the serde message.
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &actix_web::HttpRequest) -> Error {
    let message = match &err {
        actix_web::error::JsonPayloadError::Deserialize(err) => format!(
            "Invalid JSON at line {}, column {}: {}",
            err.line(),
            err.column(),
            err
        ),
        err => err.to_string(),
    };
    tracing::debug!("Rejected request body: {message}");
    let body = JsonResponse::<()>::build().to_json_response(false, message);
    match serde_json::to_string(&body) {
        Ok(body) => InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type("application/json")
                .body(body),
        )
        .into(),
        Err(_) => ErrorBadRequest(err),
    }
}
