use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ApiSettings, ChatRequest, DomainError};

/// A [`ChatClient`] that replays canned responses and records every request.
///
/// Responses are served in order; the last one repeats once the queue is
/// down to a single entry. Like a real client it refuses to "send" without
/// an API key.
pub struct MockChatClient {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatClient {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses(vec![response.into()])
    }

    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        settings: &ApiSettings,
        request: &ChatRequest,
    ) -> Result<String, DomainError> {
        if !settings.has_api_key() {
            return Err(DomainError::MissingCredential);
        }

        lock(&self.requests).push(request.clone());

        let mut responses = lock(&self.responses);
        let response = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };

        debug!("MockChatClient answering request #{}", self.call_count());
        response.ok_or_else(|| DomainError::malformed("MockChatClient has no response queued"))
    }
}
