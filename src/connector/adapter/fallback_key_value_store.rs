use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::application::KeyValueStore;
use crate::domain::DomainError;

/// Best-effort persistence: tries the durable `primary` store and falls back
/// to a lower-durability store when the primary fails.
///
/// Reads consult the fallback whenever the primary errors or has no value, so
/// anything saved during an outage is still visible for the session.
pub struct FallbackKeyValueStore {
    primary: Arc<dyn KeyValueStore>,
    fallback: Arc<dyn KeyValueStore>,
}

impl FallbackKeyValueStore {
    pub fn new(primary: Arc<dyn KeyValueStore>, fallback: Arc<dyn KeyValueStore>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl KeyValueStore for FallbackKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        match self.primary.get(key).await {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => self.fallback.get(key).await,
            Err(e) => {
                warn!(
                    "{} store unavailable ({e}); reading {key} from {} store",
                    self.primary.name(),
                    self.fallback.name()
                );
                self.fallback.get(key).await
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        match self.primary.set(key, value).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    "{} store unavailable ({e}); keeping {key} in {} store for this session",
                    self.primary.name(),
                    self.fallback.name()
                );
                self.fallback.set(key, value).await
            }
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{InMemoryKeyValueStore, JsonFileKeyValueStore};
    use tempfile::tempdir;

    #[tokio::test]
    async fn uses_primary_when_available() {
        let dir = tempdir().expect("tempdir");
        let primary = Arc::new(JsonFileKeyValueStore::new(dir.path().join("settings.json")));
        let fallback = Arc::new(InMemoryKeyValueStore::new());
        let store = FallbackKeyValueStore::new(primary.clone(), fallback.clone());

        store.set("k", "v").await.unwrap();

        assert_eq!(primary.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(fallback.get("k").await.unwrap(), None);
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn falls_back_when_primary_fails() {
        let dir = tempdir().expect("tempdir");
        // A directory cannot be read or written as a file.
        let primary = Arc::new(JsonFileKeyValueStore::new(dir.path()));
        let fallback = Arc::new(InMemoryKeyValueStore::new());
        let store = FallbackKeyValueStore::new(primary, fallback.clone());

        store.set("k", "v").await.unwrap();

        assert_eq!(fallback.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
