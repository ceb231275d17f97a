use std::ops::Range;
use std::path::PathBuf;

use anyhow::Result;

use crate::domain::VariantCount;

use super::super::Container;
use super::{emit_document, open_document, read_document};

pub struct ParaphraseController<'a> {
    container: &'a Container,
}

impl<'a> ParaphraseController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn paraphrase(
        &self,
        file: PathBuf,
        count: usize,
        apply: Option<usize>,
        selection: Option<Range<usize>>,
        output: Option<PathBuf>,
    ) -> Result<String> {
        let body = read_document(&file).await?;
        let (doc, scope) = match open_document(body, selection) {
            Ok(opened) => opened,
            Err(e) => return Ok(e.status_message()),
        };

        let use_case = self.container.paraphrase_use_case();
        let variants = match use_case
            .execute_on(&doc, scope, VariantCount::new(count))
            .await
        {
            Ok(variants) => variants,
            Err(e) => return Ok(e.status_message()),
        };

        let Some(choice) = apply else {
            return Ok(self.format_variants(&variants));
        };

        let Some(variant) = choice.checked_sub(1).and_then(|i| variants.get(i)) else {
            return Ok(format!(
                "Variant {} does not exist; the model returned {}.\n\n{}",
                choice,
                variants.len(),
                self.format_variants(&variants)
            ));
        };

        if let Err(e) = use_case.apply(&doc, scope, variant).await {
            return Ok(e.status_message());
        }
        emit_document(output, doc.body().await).await
    }

    fn format_variants(&self, variants: &[String]) -> String {
        variants
            .iter()
            .enumerate()
            .map(|(i, v)| format!("Variant {}: {}", i + 1, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
