use std::sync::Arc;

use crate::application::{AnnotateDocumentUseCase, DocumentHost, ReviewTextUseCase};
use crate::domain::{AnnotationReport, DocumentScope, DomainError, ReviewRequest, ReviewSession};

#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub session: ReviewSession,
    pub report: AnnotationReport,
}

/// Review the text of a document scope and annotate the document with the
/// result. The model call completes before the document is touched.
pub struct ReviewDocumentUseCase {
    review: Arc<ReviewTextUseCase>,
    annotate: AnnotateDocumentUseCase,
}

impl ReviewDocumentUseCase {
    pub fn new(review: Arc<ReviewTextUseCase>) -> Self {
        Self {
            review,
            annotate: AnnotateDocumentUseCase::new(),
        }
    }

    pub async fn execute(
        &self,
        host: &dyn DocumentHost,
        scope: DocumentScope,
        focus_areas: Vec<String>,
        custom_instructions: &str,
    ) -> Result<ReviewOutcome, DomainError> {
        let text = host.read_text(scope).await?;
        let request = ReviewRequest::new(text)
            .with_focus_areas(focus_areas)
            .with_custom_instructions(custom_instructions);

        let session = self.review.execute(request).await?;
        let report = self.annotate.execute(host, scope, session.result()).await?;

        Ok(ReviewOutcome { session, report })
    }

    /// Repeat `session` and annotate `host` with the fresh result.
    pub async fn execute_again(
        &self,
        host: &dyn DocumentHost,
        scope: DocumentScope,
        session: &ReviewSession,
    ) -> Result<ReviewOutcome, DomainError> {
        let session = self.review.review_again(session).await?;
        let report = self.annotate.execute(host, scope, session.result()).await?;

        Ok(ReviewOutcome { session, report })
    }
}
