use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::KeyValueStore;
use crate::domain::DomainError;

/// Durable store backed by a single JSON object file.
///
/// Every write rewrites the whole file; a missing file reads as empty.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileKeyValueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                DomainError::storage(format!(
                    "{} is not a valid settings file: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.read_all().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        tokio::fs::write(&self.path, json).await?;

        debug!("Wrote {key} to {}", self.path.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileKeyValueStore::new(dir.path().join("settings.json"));
        assert_eq!(store.get("RM_OPENAI_MODEL").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_persist_across_instances() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.json");

        let store = JsonFileKeyValueStore::new(&path);
        store.set("RM_OPENAI_MODEL", "gpt-4o").await.unwrap();
        store.set("RM_OPENAI_API_KEY", "sk-test").await.unwrap();

        let reopened = JsonFileKeyValueStore::new(&path);
        assert_eq!(
            reopened.get("RM_OPENAI_MODEL").await.unwrap().as_deref(),
            Some("gpt-4o")
        );
        assert_eq!(
            reopened.get("RM_OPENAI_API_KEY").await.unwrap().as_deref(),
            Some("sk-test")
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileKeyValueStore::new(&path);
        let err = store.get("RM_OPENAI_MODEL").await.unwrap_err();
        assert!(matches!(err, DomainError::StorageError(_)));
    }
}
