use std::ops::Range;
use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

use crate::application::ReviewOutcome;
use crate::connector::InMemoryDocument;
use crate::domain::{DocumentScope, DomainError, ReviewSession};

use super::super::Container;
use super::{emit_document, open_document, read_document};

pub struct ReviewController<'a> {
    container: &'a Container,
}

impl<'a> ReviewController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn review(
        &self,
        file: PathBuf,
        focus: Vec<String>,
        instructions: String,
        selection: Option<Range<usize>>,
        output: Option<PathBuf>,
    ) -> Result<String> {
        let body = read_document(&file).await?;
        let (doc, scope) = match open_document(body, selection) {
            Ok(opened) => opened,
            Err(e) => return Ok(e.status_message()),
        };

        let use_case = self.container.review_document_use_case();
        let outcome = match use_case.execute(&doc, scope, focus, &instructions).await {
            Ok(outcome) => outcome,
            Err(e) => return Ok(e.status_message()),
        };

        self.remember(&outcome.session).await;
        self.format_outcome(&outcome, &doc, output).await
    }

    pub async fn review_again(&self, output: Option<PathBuf>) -> Result<String> {
        let history = self.container.history_use_case();
        let previous = match history.last().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                return Ok(DomainError::not_found("no previous review").status_message());
            }
            Err(e) => return Ok(e.status_message()),
        };

        let doc = InMemoryDocument::new(previous.request().text());
        let use_case = self.container.review_document_use_case();
        let outcome = match use_case
            .execute_again(&doc, DocumentScope::Body, &previous)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => return Ok(e.status_message()),
        };

        self.remember(&outcome.session).await;
        self.format_outcome(&outcome, &doc, output).await
    }

    async fn remember(&self, session: &ReviewSession) {
        if let Err(e) = self.container.history_use_case().remember(session).await {
            warn!("Failed to store review for review-again: {}", e);
        }
    }

    async fn format_outcome(
        &self,
        outcome: &ReviewOutcome,
        doc: &InMemoryDocument,
        output: Option<PathBuf>,
    ) -> Result<String> {
        let mut text = self.format_review(outcome);
        text.push('\n');
        text.push_str(&emit_document(output, doc.render_annotated().await).await?);
        Ok(text)
    }

    fn format_review(&self, outcome: &ReviewOutcome) -> String {
        let result = outcome.session.result();
        if result.comments().is_empty() && result.summary().is_none() {
            return "No comments. The text looks good.\n".to_string();
        }

        let mut output = format!(
            "Review: {} comments ({} anchored, {} unanchored)\n\n",
            result.comments().len(),
            outcome.report.anchored,
            outcome.report.unanchored
        );

        for (i, comment) in result.comments().iter().enumerate() {
            output.push_str(&format!("{}. [{}] {}\n", i + 1, comment.severity(), comment.comment()));
            if let Some(quote) = comment.quote() {
                output.push_str(&format!("   > {}\n", quote));
            }
        }

        if let Some(summary) = result.summary() {
            output.push_str(&format!("\nSummary: {}\n", summary));
        }

        output
    }
}
