use std::ops::Range;
use std::path::PathBuf;

use anyhow::Result;

use super::super::Container;
use super::{emit_document, open_document, read_document};

pub struct TrimController<'a> {
    container: &'a Container,
}

impl<'a> TrimController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn trim(
        &self,
        file: PathBuf,
        selection: Option<Range<usize>>,
        output: Option<PathBuf>,
    ) -> Result<String> {
        let body = read_document(&file).await?;
        let (doc, scope) = match open_document(body, selection) {
            Ok(opened) => opened,
            Err(e) => return Ok(e.status_message()),
        };

        let use_case = self.container.trim_use_case();
        if let Err(e) = use_case.execute_on(&doc, scope).await {
            return Ok(e.status_message());
        }

        emit_document(output, doc.body().await).await
    }
}
