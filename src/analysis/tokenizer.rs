//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split raw document text into tokens. The classifier only ever
//! uses [`whitespace::WhitespaceTokenizer`]; the trait exists so callers can
//! plug a different splitting rule into [`crate::classification::Document`].
//!
//! # Examples
//!
//! ```
//! use tweet_sentiment::analysis::tokenizer::Tokenizer;
//! use tweet_sentiment::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that one tokenizer can be shared by
/// the worker threads of parallel training.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
