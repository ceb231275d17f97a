pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnnotateDocumentUseCase, ChatClient, DocumentHost, KeyValueStore, ManageSettingsUseCase,
    ParaphraseTextUseCase, ReviewDocumentUseCase, ReviewHistoryUseCase, ReviewOutcome,
    ReviewTextUseCase, TrimTextUseCase,
};

pub use cli::{Commands, SettingsCommand};

pub use connector::{
    Container, ContainerConfig, FallbackKeyValueStore, InMemoryDocument, InMemoryKeyValueStore,
    JsonFileKeyValueStore, MockChatClient, OpenAiChatClient, Router,
};

pub use domain::{
    extract_json, normalize_review, parse_review, split_variants, ApiSettings, ChatRequest,
    DocumentScope, DomainError, ReviewComment, ReviewRequest, ReviewResult, ReviewSession,
    Severity, VariantCount,
};
