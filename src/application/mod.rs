//! # Application Layer
//!
//! Capability traits for the outside world (model endpoint, key-value
//! storage, host document) and the use cases that orchestrate them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
