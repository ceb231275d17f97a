mod chat_client;
mod document_host;
mod key_value_store;

pub use chat_client::*;
pub use document_host::*;
pub use key_value_store::*;
