use std::sync::Arc;

use tracing::{debug, info};

use crate::application::KeyValueStore;
use crate::domain::{ApiSettings, DomainError, API_KEY_KEY, BASE_URL_KEY, MODEL_KEY};

/// Loads and saves the API settings triple.
pub struct ManageSettingsUseCase {
    store: Arc<dyn KeyValueStore>,
    env_overrides: bool,
}

impl ManageSettingsUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            env_overrides: false,
        }
    }

    /// Let `RM_OPENAI_*` environment variables override stored values in
    /// [`Self::resolve`].
    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    /// Stored settings, with defaults for any missing key.
    pub async fn load(&self) -> Result<ApiSettings, DomainError> {
        let defaults = ApiSettings::default();

        let api_key = self.store.get(API_KEY_KEY).await?;
        let base_url = self.store.get(BASE_URL_KEY).await?;
        let model = self.store.get(MODEL_KEY).await?;

        Ok(ApiSettings::new(
            api_key.unwrap_or_default(),
            base_url.unwrap_or_else(|| defaults.base_url().to_string()),
            model.unwrap_or_else(|| defaults.model().to_string()),
        ))
    }

    /// Settings to use for the next request.
    pub async fn resolve(&self) -> Result<ApiSettings, DomainError> {
        let settings = self.load().await?;
        let settings = if self.env_overrides {
            settings.with_env_overrides()
        } else {
            settings
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    pub async fn save(&self, settings: &ApiSettings) -> Result<(), DomainError> {
        self.store.set(API_KEY_KEY, settings.api_key()).await?;
        self.store.set(BASE_URL_KEY, settings.base_url()).await?;
        self.store.set(MODEL_KEY, settings.model()).await?;
        info!("Saved settings to {} store", self.store.name());
        Ok(())
    }

    /// Apply the given changes to the stored settings and save the result.
    /// `None` leaves a value untouched.
    pub async fn update(
        &self,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<ApiSettings, DomainError> {
        let mut settings = self.load().await?;
        if let Some(key) = api_key {
            settings = settings.with_api_key(key.trim());
        }
        if let Some(url) = base_url {
            settings = settings.with_base_url(url.trim());
        }
        if let Some(model) = model {
            settings = settings.with_model(model.trim());
        }
        self.save(&settings).await?;
        Ok(settings)
    }
}
