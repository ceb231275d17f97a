use serde::{Deserialize, Serialize};

pub const MIN_VARIANTS: usize = 1;
pub const MAX_VARIANTS: usize = 3;

/// Number of paraphrase variants requested, always within 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantCount(usize);

impl VariantCount {
    /// Clamp `requested` into the supported range.
    pub fn new(requested: usize) -> Self {
        Self(requested.clamp(MIN_VARIANTS, MAX_VARIANTS))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for VariantCount {
    fn default() -> Self {
        Self(MAX_VARIANTS)
    }
}
