//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on single whitespace characters.
///
/// Every delimiter ends a token, so runs of whitespace produce empty tokens
/// and a leading delimiter produces a leading empty token. Trailing empty
/// tokens are dropped. Text without any delimiter, including the empty
/// string, comes back as a single token.
///
/// The delimiter set is the ASCII whitespace class: space, `\t`, `\n`,
/// vertical tab, form feed and `\r`.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    fn is_delimiter(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    }

    /// Split `text` into tokens without boxing the result.
    pub fn split(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut delimited = false;

        for (offset, c) in text.char_indices() {
            if Self::is_delimiter(c) {
                tokens.push(Token::with_offsets(
                    &text[start..offset],
                    tokens.len(),
                    start,
                    offset,
                ));
                start = offset + c.len_utf8();
                delimited = true;
            }
        }
        tokens.push(Token::with_offsets(
            &text[start..],
            tokens.len(),
            start,
            text.len(),
        ));

        if delimited {
            while tokens.last().is_some_and(Token::is_empty) {
                tokens.pop();
            }
        }

        tokens
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        WhitespaceTokenizer::new()
            .split(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].start_offset, 12);
        assert_eq!(tokens[2].end_offset, 16);
    }

    #[test]
    fn test_repeated_delimiters_keep_empty_tokens() {
        assert_eq!(texts("good  flight"), vec!["good", "", "flight"]);
        assert_eq!(texts(" leading"), vec!["", "leading"]);
    }

    #[test]
    fn test_trailing_empty_tokens_dropped() {
        assert_eq!(texts("late flight  "), vec!["late", "flight"]);
        assert!(texts("   ").is_empty());
    }

    #[test]
    fn test_text_without_delimiter() {
        assert_eq!(texts("single"), vec!["single"]);
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn test_case_and_punctuation_preserved() {
        assert_eq!(texts("Great, FLIGHT!"), vec!["Great,", "FLIGHT!"]);
    }

    #[test]
    fn test_non_ascii_whitespace_is_not_a_delimiter() {
        assert_eq!(texts("a\u{00A0}b c"), vec!["a\u{00A0}b", "c"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
