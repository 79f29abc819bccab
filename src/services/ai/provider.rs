use super::error::AiError;
use crate::configuration::AiSettings;
use async_trait::async_trait;
use std::time::Duration;

/// One chat-completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Optional system message sent ahead of the prompt.
    pub system: Option<String>,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            system: None,
            prompt,
            max_tokens,
            temperature,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Raw provider reply: the text and the provider-reported total token count.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub total_tokens: u32,
}

/// Abstraction over completion backends.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AiError>;
}

/// Calls the OpenAI Chat Completions API (or any compatible endpoint).
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(settings: &AiSettings, api_key: &str) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder();
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }
        let client = builder.build().map_err(|source| AiError::Client {
            provider: "openai".to_string(),
            source,
        })?;

        Ok(Self {
            endpoint: settings.endpoint.clone(),
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            client,
        })
    }

    fn body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": request.prompt }));

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(name = "Chat completion request.", skip(self, request), fields(model = %self.model, max_tokens = request.max_tokens))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.body(request))
            .send()
            .await
            .map_err(|source| AiError::Request {
                provider: self.name().to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status {
                provider: self.name().to_string(),
                status,
                body,
            });
        }

        let json: serde_json::Value =
            response.json().await.map_err(|source| AiError::Decode {
                provider: self.name().to_string(),
                source,
            })?;

        let text = json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AiError::EmptyContent {
                provider: self.name().to_string(),
            })?;
        let total_tokens = json["usage"]["total_tokens"]
            .as_u64()
            .map(|tokens| u32::try_from(tokens).unwrap_or(u32::MAX))
            .unwrap_or(0);

        Ok(Completion { text, total_tokens })
    }
}
