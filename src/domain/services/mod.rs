mod prompt_builder;
mod response_parser;
mod variant_splitter;

pub use prompt_builder::*;
pub use response_parser::*;
pub use variant_splitter::*;
