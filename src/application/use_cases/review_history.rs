use std::sync::Arc;

use tracing::debug;

use crate::application::KeyValueStore;
use crate::domain::{DomainError, ReviewSession};

pub const LAST_REVIEW_KEY: &str = "RM_LAST_REVIEW";

/// Persists the most recent [`ReviewSession`] so "review again" survives
/// across CLI invocations.
pub struct ReviewHistoryUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl ReviewHistoryUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replace the stored session with `session`.
    pub async fn remember(&self, session: &ReviewSession) -> Result<(), DomainError> {
        let json = serde_json::to_string(session)?;
        self.store.set(LAST_REVIEW_KEY, &json).await?;
        debug!(
            "Stored last review ({} comments)",
            session.result().comments().len()
        );
        Ok(())
    }

    pub async fn last(&self) -> Result<Option<ReviewSession>, DomainError> {
        match self.store.get(LAST_REVIEW_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
