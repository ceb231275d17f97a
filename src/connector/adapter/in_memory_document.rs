use std::ops::Range;

use aho_corasick::AhoCorasickBuilder;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::DocumentHost;
use crate::domain::{DocumentScope, DomainError, SearchOptions, TextMatch};

/// A comment attached to a byte range of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentComment {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

struct DocumentState {
    body: String,
    selection: Option<Range<usize>>,
    comments: Vec<DocumentComment>,
    syncs: usize,
}

impl DocumentState {
    fn scope_range(&self, scope: DocumentScope) -> Range<usize> {
        match scope {
            DocumentScope::Body => 0..self.body.len(),
            DocumentScope::Selection => self.selection.clone().unwrap_or(0..0),
        }
    }
}

/// Plain-text [`DocumentHost`] held in memory.
///
/// Used by the CLI to annotate files and by tests as a fake host. Offsets are
/// byte positions and must fall on character boundaries.
pub struct InMemoryDocument {
    state: Mutex<DocumentState>,
}

impl InMemoryDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(DocumentState {
                body: body.into(),
                selection: None,
                comments: Vec::new(),
                syncs: 0,
            }),
        }
    }

    /// Mark `range` as the user's selection.
    pub fn with_selection(mut self, range: Range<usize>) -> Result<Self, DomainError> {
        let state = self.state.get_mut();
        validate_range(&state.body, &range)?;
        state.selection = Some(range);
        Ok(self)
    }

    pub async fn body(&self) -> String {
        self.state.lock().await.body.clone()
    }

    pub async fn comments(&self) -> Vec<DocumentComment> {
        self.state.lock().await.comments.clone()
    }

    pub async fn sync_count(&self) -> usize {
        self.state.lock().await.syncs
    }

    /// Render the body with Markdown-style footnote markers after each
    /// commented range and the comment texts listed at the end.
    pub async fn render_annotated(&self) -> String {
        let state = self.state.lock().await;
        if state.comments.is_empty() {
            return state.body.clone();
        }

        let mut markers: Vec<(usize, usize)> = state
            .comments
            .iter()
            .enumerate()
            .map(|(i, c)| (c.end, i + 1))
            .collect();
        markers.sort_by_key(|&(end, n)| (end, n));

        let mut output = String::with_capacity(state.body.len() + markers.len() * 8);
        let mut cursor = 0;
        for (end, n) in markers {
            output.push_str(&state.body[cursor..end]);
            output.push_str(&format!("[^{n}]"));
            cursor = end;
        }
        output.push_str(&state.body[cursor..]);

        if !output.ends_with('\n') {
            output.push('\n');
        }
        output.push('\n');
        for (i, comment) in state.comments.iter().enumerate() {
            output.push_str(&format!("[^{}]: {}\n", i + 1, comment.text));
        }
        output
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_whole_word(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn validate_range(body: &str, range: &Range<usize>) -> Result<(), DomainError> {
    if range.start > range.end || range.end > body.len() {
        return Err(DomainError::invalid_input(format!(
            "range {}..{} is outside the document (length {})",
            range.start,
            range.end,
            body.len()
        )));
    }
    if !body.is_char_boundary(range.start) || !body.is_char_boundary(range.end) {
        return Err(DomainError::invalid_input(format!(
            "range {}..{} splits a character",
            range.start, range.end
        )));
    }
    Ok(())
}

#[async_trait]
impl DocumentHost for InMemoryDocument {
    async fn read_text(&self, scope: DocumentScope) -> Result<String, DomainError> {
        let state = self.state.lock().await;
        let range = state.scope_range(scope);
        Ok(state.body[range].to_string())
    }

    async fn search(
        &self,
        scope: DocumentScope,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<TextMatch>, DomainError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // Literal match. Quotes may be as long as the document.
        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(!options.match_case)
            .build([query])
            .map_err(|e| DomainError::document(format!("invalid search query: {e}")))?;

        let state = self.state.lock().await;
        let range = state.scope_range(scope);
        let offset = range.start;
        let haystack = &state.body[range];
        let matches: Vec<TextMatch> = automaton
            .find_iter(haystack)
            .filter(|m| !options.match_whole_word || is_whole_word(haystack, m.start(), m.end()))
            .map(|m| TextMatch::new(offset + m.start(), offset + m.end()))
            .collect();

        debug!("Search in {scope} found {} matches", matches.len());
        Ok(matches)
    }

    async fn comment_on_match(&self, target: TextMatch, text: &str) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        validate_range(&state.body, &(target.start()..target.end()))?;
        state.comments.push(DocumentComment {
            start: target.start(),
            end: target.end(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn comment_on_scope(&self, scope: DocumentScope, text: &str) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let range = state.scope_range(scope);
        state.comments.push(DocumentComment {
            start: range.start,
            end: range.end,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn replace_scope(&self, scope: DocumentScope, text: &str) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let range = state.scope_range(scope);
        let new_end = range.start + text.len();
        let old_end = range.end;

        state.body.replace_range(range.clone(), text);

        // Keep existing comments on valid ranges: shift those after the
        // replaced text and pin overlapping ones to the new text.
        for comment in &mut state.comments {
            if comment.start >= old_end {
                comment.start = comment.start - old_end + new_end;
                comment.end = comment.end - old_end + new_end;
            } else if comment.end > range.start {
                comment.start = comment.start.min(range.start);
                comment.end = if comment.end >= old_end {
                    comment.end - old_end + new_end
                } else {
                    new_end
                };
            }
        }

        state.selection = match scope {
            DocumentScope::Selection => Some(range.start..new_end),
            DocumentScope::Body => None,
        };
        Ok(())
    }

    async fn append_paragraph(&self, text: &str) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        if !state.body.is_empty() && !state.body.ends_with('\n') {
            state.body.push('\n');
        }
        state.body.push_str(text);
        state.body.push('\n');
        Ok(())
    }

    async fn sync(&self) -> Result<(), DomainError> {
        self.state.lock().await.syncs += 1;
        Ok(())
    }
}
