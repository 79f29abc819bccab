use thiserror::Error;

/// Why a completion request produced no usable text.
///
/// Never leaves [`super::AiService`]; every variant collapses into the
/// fallback branch there and is only logged.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("{provider}: failed to build HTTP client: {source}")]
    Client {
        provider: String,
        source: reqwest::Error,
    },
    #[error("{provider}: request failed: {source}")]
    Request {
        provider: String,
        source: reqwest::Error,
    },
    #[error("{provider}: HTTP {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },
    #[error("{provider}: failed to parse response: {source}")]
    Decode {
        provider: String,
        source: reqwest::Error,
    },
    #[error("{provider}: no content in response")]
    EmptyContent { provider: String },
}
