pub mod paraphrase_controller;
pub mod review_controller;
pub mod settings_controller;
pub mod trim_controller;

pub use paraphrase_controller::ParaphraseController;
pub use review_controller::ReviewController;
pub use settings_controller::SettingsController;
pub use trim_controller::TrimController;

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::connector::InMemoryDocument;
use crate::domain::{DocumentScope, DomainError};

pub(crate) async fn read_document(file: &Path) -> Result<String> {
    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))
}

/// Wrap `body` as a host document, selecting `selection` when given.
pub(crate) fn open_document(
    body: String,
    selection: Option<Range<usize>>,
) -> Result<(InMemoryDocument, DocumentScope), DomainError> {
    match selection {
        Some(range) => Ok((
            InMemoryDocument::new(body).with_selection(range)?,
            DocumentScope::Selection,
        )),
        None => Ok((InMemoryDocument::new(body), DocumentScope::Body)),
    }
}

/// Write `document` to `output` and describe where it went, or return the
/// document itself for stdout.
pub(crate) async fn emit_document(output: Option<PathBuf>, document: String) -> Result<String> {
    match output {
        Some(path) => {
            tokio::fs::write(&path, document)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(format!("Document written to {}", path.display()))
        }
        None => Ok(document),
    }
}
