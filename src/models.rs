pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod token_index;
pub use token_index::TokenIndex;
