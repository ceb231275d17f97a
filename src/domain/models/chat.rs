use serde::{Deserialize, Serialize};

/// Sampling temperature for review generation.
pub const REVIEW_TEMPERATURE: f32 = 0.2;
/// Sampling temperature for trim and paraphrase rewrites.
pub const REWRITE_TEMPERATURE: f32 = 0.4;

/// A single system + user exchange sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    system: String,
    user: String,
    temperature: f32,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>, temperature: f32) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}
