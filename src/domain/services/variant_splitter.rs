use std::sync::LazyLock;

use regex::Regex;

use crate::domain::VariantCount;

static VARIANT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^variant\s*\d+\s*:?\s*(.*)$").expect("variant header pattern is valid")
});

/// Split `Variant <n>: ...` formatted output into individual variants.
///
/// Lines following a header belong to that variant and are joined with a
/// single space. Text without any header is returned whole as one variant.
/// Blank variants are dropped before truncating to `count`.
pub fn split_variants(raw: &str, count: VariantCount) -> Vec<String> {
    let mut variants = Vec::new();
    let mut current: Option<String> = None;
    let mut saw_header = false;

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = VARIANT_HEADER.captures(line) {
            saw_header = true;
            if let Some(done) = current.take() {
                variants.push(done.trim().to_string());
            }
            current = Some(caps.get(1).map_or("", |m| m.as_str()).to_string());
        } else if let Some(acc) = current.as_mut() {
            acc.push(' ');
            acc.push_str(line);
        }
    }

    if let Some(done) = current {
        variants.push(done.trim().to_string());
    }

    if !saw_header {
        variants = vec![raw.trim().to_string()];
    }

    variants.retain(|v| !v.is_empty());
    variants.truncate(count.get());
    variants
}
