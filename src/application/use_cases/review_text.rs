use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::{ChatClient, ManageSettingsUseCase};
use crate::domain::{
    build_review_prompt, parse_review, ChatRequest, DomainError, ReviewRequest, ReviewSession,
    REVIEW_SYSTEM_PROMPT, REVIEW_TEMPERATURE,
};

/// Sends text to the model for review and interprets the JSON it returns.
pub struct ReviewTextUseCase {
    chat_client: Arc<dyn ChatClient>,
    settings: Arc<ManageSettingsUseCase>,
}

impl ReviewTextUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, settings: Arc<ManageSettingsUseCase>) -> Self {
        Self {
            chat_client,
            settings,
        }
    }

    /// Review `request.text()`.
    ///
    /// Blank text fails with [`DomainError::EmptyInput`] without any network
    /// call. The returned session replaces whatever the caller held before.
    pub async fn execute(&self, request: ReviewRequest) -> Result<ReviewSession, DomainError> {
        if request.is_blank() {
            debug!("Review skipped: input is empty");
            return Err(DomainError::EmptyInput);
        }

        let settings = self.settings.resolve().await?;
        info!(
            "Reviewing {} characters with {} (focus: {:?})",
            request.text().chars().count(),
            settings.model(),
            request.focus_areas()
        );

        let start_time = Instant::now();
        let prompt = build_review_prompt(&request);
        let chat = ChatRequest::new(REVIEW_SYSTEM_PROMPT, prompt, REVIEW_TEMPERATURE);
        let raw = self.chat_client.complete(&settings, &chat).await?;
        debug!("Raw review response: {raw}");

        let result = parse_review(&raw)?;
        info!(
            "Review produced {} comments in {:.2}s",
            result.comments().len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(ReviewSession::new(request, result))
    }

    /// Run the review of `session` again with the current settings.
    pub async fn review_again(&self, session: &ReviewSession) -> Result<ReviewSession, DomainError> {
        info!("Repeating last review");
        self.execute(session.request().clone()).await
    }
}
