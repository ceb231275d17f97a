use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on the number of comments kept from a single review.
pub const MAX_REVIEW_COMMENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Suggestion,
    Warning,
}

impl Severity {
    /// Map a raw model value onto a severity, substituting `Info` for anything
    /// unrecognized or absent.
    pub fn from_model_value(value: Option<&str>) -> Self {
        match value {
            Some("suggestion") => Self::Suggestion,
            Some("warning") => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Suggestion => "suggestion",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quote: Option<String>,
    comment: String,
    #[serde(default)]
    severity: Severity,
}

impl ReviewComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            quote: None,
            comment: comment.into(),
            severity: Severity::Info,
        }
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Text attached to the document for this comment.
    pub fn annotation_text(&self) -> String {
        format!("[{}] {}", self.severity, self.comment)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    comments: Vec<ReviewComment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl ReviewResult {
    /// Build a result, keeping at most [`MAX_REVIEW_COMMENTS`] comments in order.
    pub fn new(mut comments: Vec<ReviewComment>, summary: Option<String>) -> Self {
        comments.truncate(MAX_REVIEW_COMMENTS);
        Self { comments, summary }
    }

    pub fn comments(&self) -> &[ReviewComment] {
        &self.comments
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.summary.is_none()
    }
}

/// What the user asked to have reviewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    text: String,
    focus_areas: Vec<String>,
    custom_instructions: String,
}

impl ReviewRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focus_areas: Vec::new(),
            custom_instructions: String::new(),
        }
    }

    pub fn with_focus_areas(mut self, focus_areas: Vec<String>) -> Self {
        self.focus_areas = focus_areas;
        self
    }

    pub fn with_custom_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.custom_instructions = instructions.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focus_areas(&self) -> &[String] {
        &self.focus_areas
    }

    pub fn custom_instructions(&self) -> &str {
        &self.custom_instructions
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The last review performed, kept by the caller so it can be repeated.
///
/// Each new review replaces the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSession {
    request: ReviewRequest,
    result: ReviewResult,
}

impl ReviewSession {
    pub fn new(request: ReviewRequest, result: ReviewResult) -> Self {
        Self { request, result }
    }

    pub fn request(&self) -> &ReviewRequest {
        &self.request
    }

    pub fn result(&self) -> &ReviewResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_falls_back_to_info() {
        assert_eq!(Severity::from_model_value(Some("warning")), Severity::Warning);
        assert_eq!(Severity::from_model_value(Some("suggestion")), Severity::Suggestion);
        assert_eq!(Severity::from_model_value(Some("bogus")), Severity::Info);
        assert_eq!(Severity::from_model_value(Some("WARNING")), Severity::Info);
        assert_eq!(Severity::from_model_value(None), Severity::Info);
    }

    #[test]
    fn review_result_keeps_first_ten_comments() {
        let comments = (0..12)
            .map(|i| ReviewComment::new(format!("c{i}")))
            .collect();
        let result = ReviewResult::new(comments, None);
        assert_eq!(result.comments().len(), MAX_REVIEW_COMMENTS);
        assert_eq!(result.comments()[0].comment(), "c0");
        assert_eq!(result.comments()[9].comment(), "c9");
    }

    #[test]
    fn review_comment_serializes_without_missing_quote() {
        let comment = ReviewComment::new("Tighten this").with_severity(Severity::Suggestion);
        let json = serde_json::to_string(&comment).unwrap();
        assert_eq!(json, r#"{"comment":"Tighten this","severity":"suggestion"}"#);
    }

    #[test]
    fn annotation_text_is_tagged_with_severity() {
        let comment = ReviewComment::new("Cite a source").with_severity(Severity::Warning);
        assert_eq!(comment.annotation_text(), "[warning] Cite a source");
    }
}
