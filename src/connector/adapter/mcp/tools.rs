use schemars::JsonSchema;
use serde::Serialize;

use crate::domain::{ReviewComment, ReviewResult};

/// A single review comment returned by the review tools
#[derive(Debug, Serialize, JsonSchema)]
pub struct ReviewCommentOutput {
    /// Passage of the input the comment refers to, when the model quoted one
    pub quote: Option<String>,

    /// The feedback itself
    pub comment: String,

    /// One of "info", "suggestion" or "warning"
    pub severity: String,
}

/// Result of the review_text and review_again tools
#[derive(Debug, Serialize, JsonSchema)]
pub struct ReviewOutput {
    /// At most 10 comments, in the order the model produced them
    pub comments: Vec<ReviewCommentOutput>,

    /// Overall assessment, if the model gave one
    pub summary: Option<String>,
}

impl From<&ReviewComment> for ReviewCommentOutput {
    fn from(comment: &ReviewComment) -> Self {
        Self {
            quote: comment.quote().map(String::from),
            comment: comment.comment().to_string(),
            severity: comment.severity().to_string(),
        }
    }
}

impl From<&ReviewResult> for ReviewOutput {
    fn from(result: &ReviewResult) -> Self {
        Self {
            comments: result.comments().iter().map(ReviewCommentOutput::from).collect(),
            summary: result.summary().map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    #[test]
    fn test_review_output_serialization() {
        let result = ReviewResult::new(
            vec![ReviewComment::new("Define the acronym")
                .with_quote("LLM")
                .with_severity(Severity::Suggestion)],
            Some("Readable.".to_string()),
        );
        let json = serde_json::to_string(&ReviewOutput::from(&result)).unwrap();
        assert!(json.contains("Define the acronym"));
        assert!(json.contains("\"severity\":\"suggestion\""));
        assert!(json.contains("Readable."));
    }
}
