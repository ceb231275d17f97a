pub mod mcp;
mod fallback_key_value_store;
mod in_memory_document;
mod in_memory_key_value_store;
mod json_file_key_value_store;
mod mock_chat_client;
mod openai_chat_client;

pub use fallback_key_value_store::*;
pub use in_memory_document::*;
pub use in_memory_key_value_store::*;
pub use json_file_key_value_store::*;
pub use mock_chat_client::*;
pub use openai_chat_client::*;
