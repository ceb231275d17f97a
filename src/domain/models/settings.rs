use serde::{Deserialize, Serialize};

pub const API_KEY_KEY: &str = "RM_OPENAI_API_KEY";
pub const BASE_URL_KEY: &str = "RM_OPENAI_BASE_URL";
pub const MODEL_KEY: &str = "RM_OPENAI_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Credentials and endpoint for the chat-completion API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    api_key: String,
    base_url: String,
    model: String,
}

impl ApiSettings {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url())
    }

    /// Apply `RM_OPENAI_*` environment variables on top of stored values.
    /// Overrides are never written back to the store.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_KEY).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        if let Some(url) = lookup(BASE_URL_KEY).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(model) = lookup(MODEL_KEY).filter(|v| !v.is_empty()) {
            self.model = model;
        }
        self
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::new("", DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

// The key must never end up in logs.
impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}
