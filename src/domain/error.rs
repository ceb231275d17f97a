use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("Upstream error: {status} {status_text}: {body}")]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No text to process")]
    EmptyInput,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    pub fn upstream(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn document(msg: impl Into<String>) -> Self {
        Self::DocumentError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// One-line status shown to the user when an action fails.
    pub fn status_message(&self) -> String {
        match self {
            Self::MissingCredential => {
                "No API key configured. Run `reviewmate settings set --api-key <KEY>` first."
                    .to_string()
            }
            Self::Upstream {
                status,
                status_text,
                body,
            } => format!("The model endpoint returned {status} {status_text}: {body}"),
            Self::MalformedResponse(_) => {
                "The model response could not be understood. Try again.".to_string()
            }
            Self::EmptyInput => "No text selected. Nothing to do.".to_string(),
            Self::NotFound(what) => format!("Nothing to repeat: {what}"),
            other => format!("Action failed: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_message_carries_status_and_body() {
        let err = DomainError::upstream(401, "Unauthorized", "{\"error\":\"bad key\"}");
        let msg = err.status_message();
        assert!(msg.contains("401"));
        assert!(msg.contains("Unauthorized"));
        assert!(msg.contains("bad key"));
    }

    #[test]
    fn empty_input_is_reported_as_a_no_op() {
        let err = DomainError::EmptyInput;
        assert!(err.is_empty_input());
        assert_eq!(err.status_message(), "No text selected. Nothing to do.");
    }
}
