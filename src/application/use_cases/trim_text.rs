use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ChatClient, DocumentHost, ManageSettingsUseCase};
use crate::domain::{
    build_trim_prompt, ChatRequest, DocumentScope, DomainError, REWRITE_SYSTEM_PROMPT,
    REWRITE_TEMPERATURE,
};

/// Asks the model for a more concise version of a passage.
pub struct TrimTextUseCase {
    chat_client: Arc<dyn ChatClient>,
    settings: Arc<ManageSettingsUseCase>,
}

impl TrimTextUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, settings: Arc<ManageSettingsUseCase>) -> Self {
        Self {
            chat_client,
            settings,
        }
    }

    pub async fn execute(&self, text: &str) -> Result<String, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let settings = self.settings.resolve().await?;
        info!("Trimming {} characters with {}", text.chars().count(), settings.model());

        let chat = ChatRequest::new(
            REWRITE_SYSTEM_PROMPT,
            build_trim_prompt(text),
            REWRITE_TEMPERATURE,
        );
        let raw = self.chat_client.complete(&settings, &chat).await?;
        debug!("Raw trim response: {raw}");

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::malformed("model returned no text"));
        }
        Ok(trimmed.to_string())
    }

    /// Trim the text of `scope` and replace it in place.
    pub async fn execute_on(
        &self,
        host: &dyn DocumentHost,
        scope: DocumentScope,
    ) -> Result<String, DomainError> {
        let text = host.read_text(scope).await?;
        let trimmed = self.execute(&text).await?;
        host.replace_scope(scope, &trimmed).await?;
        host.sync().await?;
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{InMemoryDocument, InMemoryKeyValueStore, MockChatClient};
    use crate::domain::ApiSettings;

    async fn setup(client: Arc<MockChatClient>) -> TrimTextUseCase {
        let settings = Arc::new(ManageSettingsUseCase::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        settings
            .save(&ApiSettings::default().with_api_key("sk-test"))
            .await
            .unwrap();
        TrimTextUseCase::new(client, settings)
    }

    #[tokio::test]
    async fn trims_and_replaces_selection() {
        let client = Arc::new(MockChatClient::with_response("  Short version.\n"));
        let use_case = setup(client.clone()).await;
        let doc = InMemoryDocument::new("Keep. A very long and winding sentence. Keep.")
            .with_selection(6..39)
            .unwrap();

        let trimmed = use_case
            .execute_on(&doc, DocumentScope::Selection)
            .await
            .unwrap();

        assert_eq!(trimmed, "Short version.");
        assert_eq!(doc.body().await, "Keep. Short version. Keep.");
        assert_eq!(client.requests()[0].temperature(), REWRITE_TEMPERATURE);
        assert_eq!(doc.sync_count().await, 1);
    }

    #[tokio::test]
    async fn empty_model_output_is_malformed() {
        let client = Arc::new(MockChatClient::with_response("   "));
        let use_case = setup(client).await;

        let err = use_case.execute("Some text.").await.unwrap_err();
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn blank_text_makes_no_request() {
        let client = Arc::new(MockChatClient::with_response("x"));
        let use_case = setup(client.clone()).await;

        let err = use_case.execute("").await.unwrap_err();
        assert!(err.is_empty_input());
        assert_eq!(client.call_count(), 0);
    }
}
