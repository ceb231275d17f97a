//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completions (OpenAI-compatible HTTP, plus a scripted mock)
//! - Key-value storage (JSON file with in-memory fallback)
//! - Host document (in-memory plain text)
//! - API layer (container, router, controllers) and the MCP server

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
