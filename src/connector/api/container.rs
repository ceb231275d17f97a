use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{
    ChatClient, KeyValueStore, ManageSettingsUseCase, ParaphraseTextUseCase,
    ReviewDocumentUseCase, ReviewHistoryUseCase, ReviewTextUseCase, TrimTextUseCase,
};
use crate::connector::{
    FallbackKeyValueStore, InMemoryKeyValueStore, JsonFileKeyValueStore, OpenAiChatClient,
};

pub const SETTINGS_FILE: &str = "settings.json";

pub struct ContainerConfig {
    pub data_dir: String,
    /// Let `RM_OPENAI_*` environment variables override stored settings.
    pub env_overrides: bool,
}

pub struct Container {
    store: Arc<dyn KeyValueStore>,
    chat_client: Arc<dyn ChatClient>,
    settings: Arc<ManageSettingsUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        Ok(Self::with_chat_client(config, Arc::new(OpenAiChatClient::new())))
    }

    /// Build a container around an existing chat client.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        let session_store = Arc::new(InMemoryKeyValueStore::new());

        let store: Arc<dyn KeyValueStore> = match std::fs::create_dir_all(&config.data_dir) {
            Ok(()) => {
                let path = PathBuf::from(&config.data_dir).join(SETTINGS_FILE);
                debug!("Using settings file {}", path.display());
                Arc::new(FallbackKeyValueStore::new(
                    Arc::new(JsonFileKeyValueStore::new(path)),
                    session_store,
                ))
            }
            Err(e) => {
                warn!(
                    "Failed to create data directory {} ({}). Settings will last for this session only.",
                    config.data_dir, e
                );
                session_store
            }
        };

        let settings = Arc::new(
            ManageSettingsUseCase::new(store.clone()).with_env_overrides(config.env_overrides),
        );

        Self {
            store,
            chat_client,
            settings,
            config,
        }
    }

    pub fn settings_use_case(&self) -> Arc<ManageSettingsUseCase> {
        self.settings.clone()
    }

    pub fn history_use_case(&self) -> ReviewHistoryUseCase {
        ReviewHistoryUseCase::new(self.store.clone())
    }

    pub fn review_text_use_case(&self) -> ReviewTextUseCase {
        ReviewTextUseCase::new(self.chat_client.clone(), self.settings.clone())
    }

    pub fn review_document_use_case(&self) -> ReviewDocumentUseCase {
        ReviewDocumentUseCase::new(Arc::new(self.review_text_use_case()))
    }

    pub fn trim_use_case(&self) -> TrimTextUseCase {
        TrimTextUseCase::new(self.chat_client.clone(), self.settings.clone())
    }

    pub fn paraphrase_use_case(&self) -> ParaphraseTextUseCase {
        ParaphraseTextUseCase::new(self.chat_client.clone(), self.settings.clone())
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }
}
