use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ChatClient, DocumentHost, ManageSettingsUseCase};
use crate::domain::{
    build_paraphrase_prompt, split_variants, ChatRequest, DocumentScope, DomainError,
    VariantCount, REWRITE_SYSTEM_PROMPT, REWRITE_TEMPERATURE,
};

/// Asks the model for up to three alternative phrasings of a passage.
pub struct ParaphraseTextUseCase {
    chat_client: Arc<dyn ChatClient>,
    settings: Arc<ManageSettingsUseCase>,
}

impl ParaphraseTextUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, settings: Arc<ManageSettingsUseCase>) -> Self {
        Self {
            chat_client,
            settings,
        }
    }

    pub async fn execute(
        &self,
        text: &str,
        count: VariantCount,
    ) -> Result<Vec<String>, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let settings = self.settings.resolve().await?;
        info!(
            "Requesting {} paraphrase variants with {}",
            count.get(),
            settings.model()
        );

        let chat = ChatRequest::new(
            REWRITE_SYSTEM_PROMPT,
            build_paraphrase_prompt(text, count),
            REWRITE_TEMPERATURE,
        );
        let raw = self.chat_client.complete(&settings, &chat).await?;
        debug!("Raw paraphrase response: {raw}");

        let variants = split_variants(&raw, count);
        if variants.is_empty() {
            return Err(DomainError::malformed("model returned no variants"));
        }
        info!("Received {} variants", variants.len());
        Ok(variants)
    }

    /// Paraphrase the text of `scope` without modifying the document.
    pub async fn execute_on(
        &self,
        host: &dyn DocumentHost,
        scope: DocumentScope,
        count: VariantCount,
    ) -> Result<Vec<String>, DomainError> {
        let text = host.read_text(scope).await?;
        self.execute(&text, count).await
    }

    /// Replace the text of `scope` with a chosen variant.
    pub async fn apply(
        &self,
        host: &dyn DocumentHost,
        scope: DocumentScope,
        variant: &str,
    ) -> Result<(), DomainError> {
        if variant.trim().is_empty() {
            return Err(DomainError::invalid_input("variant is empty"));
        }
        host.replace_scope(scope, variant.trim()).await?;
        host.sync().await
    }
}
