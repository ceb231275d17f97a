use async_trait::async_trait;

use crate::domain::{DocumentScope, DomainError, SearchOptions, TextMatch};

/// The narrow set of operations the review flows need from a host document.
///
/// Mutations may be buffered by the host until [`DocumentHost::sync`] is
/// called; callers sync after every discrete action.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Text of `scope`. An absent selection reads as empty text.
    async fn read_text(&self, scope: DocumentScope) -> Result<String, DomainError>;

    /// Every occurrence of `query` inside `scope`, in document order.
    async fn search(
        &self,
        scope: DocumentScope,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<TextMatch>, DomainError>;

    async fn comment_on_match(&self, target: TextMatch, text: &str) -> Result<(), DomainError>;

    /// Attach a comment to the whole scope, used when no anchor was found.
    async fn comment_on_scope(&self, scope: DocumentScope, text: &str) -> Result<(), DomainError>;

    async fn replace_scope(&self, scope: DocumentScope, text: &str) -> Result<(), DomainError>;

    /// Insert a paragraph at the end of the document body.
    async fn append_paragraph(&self, text: &str) -> Result<(), DomainError>;

    async fn sync(&self) -> Result<(), DomainError>;
}
