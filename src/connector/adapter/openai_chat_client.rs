use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ApiSettings, ChatRequest, DomainError};

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible `chat/completions` endpoints.
///
/// Implements [`ChatClient`] so use cases stay decoupled from transport and
/// serialization details. Endpoint, model and key come from the
/// [`ApiSettings`] passed with each call, so a settings change takes effect
/// on the next request.
///
/// Each call is exactly one `POST {base_url}/chat/completions`: no retry, no
/// streaming, and no client-side timeout.
pub struct OpenAiChatClient {
    client: reqwest::Client,
}

impl OpenAiChatClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for OpenAiChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(
        &self,
        settings: &ApiSettings,
        request: &ChatRequest,
    ) -> Result<String, DomainError> {
        if !settings.has_api_key() {
            return Err(DomainError::MissingCredential);
        }

        let url = settings.completions_url();
        let body = ApiRequest {
            model: settings.model(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: request.system(),
                },
                ApiMessage {
                    role: "user",
                    content: request.user(),
                },
            ],
            temperature: request.temperature(),
        };

        debug!("POST {url} (model {})", settings.model());
        let response = self
            .client
            .post(&url)
            .bearer_auth(settings.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("OpenAiChatClient: request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(DomainError::upstream(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                body,
            ));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::transport(format!("OpenAiChatClient: failed to parse response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| DomainError::malformed("response contained no choices"))
    }
}
