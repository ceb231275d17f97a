//! # Domain Layer
//!
//! Review models, the error taxonomy, and the pure text services that shape
//! prompts and interpret model output. Nothing here performs I/O.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
