use tracing::{debug, info, warn};

use crate::application::DocumentHost;
use crate::domain::{AnnotationReport, DocumentScope, DomainError, ReviewResult, SearchOptions};

/// Writes a review back into a host document.
///
/// Comments are attached one at a time, in review order, each followed by a
/// sync so no two host round trips overlap.
pub struct AnnotateDocumentUseCase;

impl AnnotateDocumentUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        host: &dyn DocumentHost,
        scope: DocumentScope,
        result: &ReviewResult,
    ) -> Result<AnnotationReport, DomainError> {
        let mut report = AnnotationReport::default();

        for comment in result.comments() {
            let text = comment.annotation_text();

            let anchor = match comment.quote().map(str::trim).filter(|q| !q.is_empty()) {
                Some(quote) => match host.search(scope, quote, SearchOptions::loose()).await {
                    Ok(found) => found.into_iter().next(),
                    Err(e) => {
                        warn!("Quote search failed, leaving comment unanchored: {}", e);
                        None
                    }
                },
                None => None,
            };

            match anchor {
                Some(found) => {
                    host.comment_on_match(found, &text).await?;
                    report.anchored += 1;
                }
                None => {
                    debug!("No anchor for comment, attaching to {scope}");
                    host.comment_on_scope(scope, &text).await?;
                    report.unanchored += 1;
                }
            }
            host.sync().await?;
        }

        if let Some(summary) = result.summary().filter(|s| !s.trim().is_empty()) {
            host.append_paragraph(&format!("Summary: {summary}")).await?;
            host.sync().await?;
            report.summary_appended = true;
        }

        info!(
            "Annotated {}: {} anchored, {} unanchored, summary: {}",
            scope, report.anchored, report.unanchored, report.summary_appended
        );
        Ok(report)
    }
}

impl Default for AnnotateDocumentUseCase {
    fn default() -> Self {
        Self::new()
    }
}
