mod annotate_document;
mod manage_settings;
mod paraphrase_text;
mod review_document;
mod review_history;
mod review_text;
mod trim_text;

pub use annotate_document::*;
pub use manage_settings::*;
pub use paraphrase_text::*;
pub use review_document::*;
pub use review_history::*;
pub use review_text::*;
pub use trim_text::*;
