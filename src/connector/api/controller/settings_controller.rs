use anyhow::Result;

use crate::domain::ApiSettings;

use super::super::Container;

pub struct SettingsController<'a> {
    container: &'a Container,
}

impl<'a> SettingsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self) -> Result<String> {
        let use_case = self.container.settings_use_case();
        match use_case.load().await {
            Ok(settings) => Ok(self.format_settings(&settings)),
            Err(e) => Ok(e.status_message()),
        }
    }

    pub async fn set(
        &self,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<String> {
        if api_key.is_none() && base_url.is_none() && model.is_none() {
            return Ok("Nothing to change. Pass --api-key, --base-url or --model.".to_string());
        }

        let use_case = self.container.settings_use_case();
        match use_case.update(api_key, base_url, model).await {
            Ok(settings) => Ok(format!("Settings saved.\n{}", self.format_settings(&settings))),
            Err(e) => Ok(e.status_message()),
        }
    }

    fn format_settings(&self, settings: &ApiSettings) -> String {
        let key_state = if settings.has_api_key() {
            "configured"
        } else {
            "not configured"
        };
        format!(
            "API key:  {}\nBase URL: {}\nModel:    {}\nData Dir: {}",
            key_state,
            settings.base_url(),
            settings.model(),
            self.container.data_dir()
        )
    }
}
