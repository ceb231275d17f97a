use async_trait::async_trait;

use crate::domain::{ApiSettings, ChatRequest, DomainError};

/// Sends one system + user exchange to a chat-completion endpoint and returns
/// the assistant's raw text.
///
/// Implementations must fail with [`DomainError::MissingCredential`] before
/// touching the network when `settings` carries no API key, and must not
/// retry.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        settings: &ApiSettings,
        request: &ChatRequest,
    ) -> Result<String, DomainError>;
}
