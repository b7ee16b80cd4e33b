//! Text analysis module for tweet-sentiment.
//!
//! Turns raw document text into tokens. There is no filtering
//! stage: tokens reach the classifier exactly as the tokenizer produced them.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
