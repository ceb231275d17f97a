mod chat;
mod document;
mod review;
mod settings;
mod variant;

pub use chat::*;
pub use document::*;
pub use review::*;
pub use settings::*;
pub use variant::*;
