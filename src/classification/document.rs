//! Tokenized documents.

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// An ordered sequence of tokens taken from one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    /// Tokenize `text` on whitespace.
    pub fn new(text: &str) -> Self {
        let tokens = WhitespaceTokenizer::new()
            .split(text)
            .into_iter()
            .map(|token| token.text)
            .collect();
        Self { tokens }
    }

    /// Tokenize `text` with a caller-supplied tokenizer.
    pub fn with_tokenizer(text: &str, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let tokens = tokenizer.tokenize(text)?.map(|token| token.text).collect();
        Ok(Self { tokens })
    }

    /// Build a document from already split tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// All tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The tokens counted during training: everything after the first.
    ///
    /// The first field of a training text is the leading `@handle` of the
    /// tweet and is not content.
    pub fn content_tokens(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
