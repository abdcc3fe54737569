//! # JSON Lexer
//!
//! Drives the token generators over an input document, producing the token
//! sequence along with the first fatal error, if any.
use log::{debug, trace};

use crate::tokenizer::{
    Generator, GeneratorResult, LexError, LexErrorKind, Spanned, Token,
};

/// A lexer that turns JSON text into [`Token`]s.
///
/// The lexer holds no state between calls; a single instance can be reused
/// for any number of inputs, from any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lexer;

impl Lexer {
    /// Creates a new lexer.
    pub const fn new() -> Self {
        Self
    }

    /// Tokenize `text`, returning every token produced and the error that
    /// stopped lexing, if any.
    ///
    /// The error is `None` exactly when all of `text` was consumed. On error,
    /// the returned tokens are those produced before the failing position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonlex::tokenizer::{Lexer, Token};
    ///
    /// let (tokens, error) = Lexer::new().lex("{}");
    /// assert_eq!(tokens, vec![Token::BeginObject, Token::EndObject]);
    /// assert!(error.is_none());
    /// ```
    pub fn lex(&self, text: &str) -> (Vec<Token>, Option<LexError>) {
        let (spanned, error) = self.lex_spanned(text);
        (spanned.into_iter().map(|s| s.token).collect(), error)
    }

    /// Same as [`Lexer::lex`], but each token carries the character offsets
    /// it was read from.
    pub fn lex_spanned(&self, text: &str) -> (Vec<Spanned>, Option<LexError>) {
        // decode once so offsets index characters in O(1)
        let input: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut cursor = 0;

        debug!("lexing {} characters", input.len());

        while cursor < input.len() {
            match Self::next_token(&input, cursor) {
                Ok((token, end)) => {
                    debug_assert!(end > cursor, "generators must advance");
                    trace!("{}..{}: {token:?}", cursor, end);
                    tokens.push(Spanned {
                        token,
                        start: cursor,
                        end,
                    });
                    cursor = end;
                }
                Err(err) => {
                    debug!("halted after {} tokens: {err}", tokens.len());
                    return (tokens, Some(err));
                }
            }
        }

        debug!("lexed {} tokens", tokens.len());
        (tokens, None)
    }

    /// Tries each generator in priority order at `cursor`.
    fn next_token(
        input: &[char],
        cursor: usize,
    ) -> Result<(Token, usize), LexError> {
        for generator in Generator::PRIORITY {
            match generator.generate(input, cursor) {
                GeneratorResult::NoMatch => {}
                GeneratorResult::Matched(token, end) => return Ok((token, end)),
                GeneratorResult::Fatal(err) => return Err(err),
            }
        }
        Err(LexError::new(LexErrorKind::NoGeneratorMatched, cursor))
    }
}

/// Tokenize a JSON document with a fresh [`Lexer`].
pub fn tokenize(text: &str) -> (Vec<Token>, Option<LexError>) {
    Lexer::new().lex(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let (tokens, error) = tokenize("");
        assert!(tokens.is_empty());
        assert!(error.is_none());
    }

    #[test]
    fn test_whitespace_is_one_blank_per_character() {
        let input = " \t\r\n  ";
        let (tokens, error) = tokenize(input);
        assert!(error.is_none());
        assert_eq!(tokens, vec![Token::Blank; input.len()]);
    }

    #[test]
    fn test_empty_object() {
        let (tokens, error) = tokenize("{}");
        assert_eq!(tokens, vec![Token::BeginObject, Token::EndObject]);
        assert!(error.is_none());
    }

    #[test]
    fn test_string() {
        let (tokens, error) = tokenize("\"123\"");
        assert_eq!(tokens, vec![Token::StringLiteral("123".into())]);
        assert!(error.is_none());
    }

    #[test]
    fn test_escaped_newline() {
        let (tokens, error) = tokenize("\"a\\nb\"");
        assert!(error.is_none());
        assert_eq!(tokens, vec![Token::StringLiteral("a\nb".into())]);
    }

    #[test]
    fn test_numbers() {
        let cases = [
            ("0", 0.0),
            ("-1", -1.0),
            ("0.999", 0.999),
            ("-10.999", -10.999),
            ("1e3", 1000.0),
        ];
        for (input, value) in cases {
            let (tokens, error) = tokenize(input);
            assert!(error.is_none(), "input: {input:?}");
            assert_eq!(tokens, vec![Token::NumberLiteral(value)]);
        }
    }

    #[test]
    fn test_object() {
        let (tokens, error) =
            tokenize("{\"name\": \"pigoneand\", \"age\": 23}");
        assert!(error.is_none());
        assert_eq!(
            tokens,
            vec![
                Token::BeginObject,
                Token::StringLiteral("name".into()),
                Token::NameSeparator,
                Token::Blank,
                Token::StringLiteral("pigoneand".into()),
                Token::ValueSeparator,
                Token::Blank,
                Token::StringLiteral("age".into()),
                Token::NameSeparator,
                Token::Blank,
                Token::NumberLiteral(23.0),
                Token::EndObject,
            ]
        );
    }

    #[test]
    fn test_array_of_literals() {
        let (tokens, error) = tokenize("[null,true,false]");
        assert!(error.is_none());
        assert_eq!(
            tokens,
            vec![
                Token::BeginArray,
                Token::Null,
                Token::ValueSeparator,
                Token::True,
                Token::ValueSeparator,
                Token::False,
                Token::EndArray,
            ]
        );
    }

    #[test]
    fn test_malformed_number() {
        let (tokens, error) = tokenize("0.");
        assert!(tokens.is_empty());
        let error = error.expect("expected an error");
        assert_eq!(error.kind(), LexErrorKind::MalformedNumber);
        assert_eq!(error.offset(), 0);
        assert_eq!(error.message(), "not a valid number at position: 0");
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, error) = tokenize("\"abc");
        assert!(tokens.is_empty());
        let error = error.expect("expected an error");
        assert_eq!(error.kind(), LexErrorKind::UnterminatedString);
        assert_eq!(error.offset(), 0);
        assert_eq!(error.message(), "\" is not match at position: 0");
    }

    #[test]
    fn test_partial_tokens_preserved() {
        let (tokens, error) = tokenize("[1, \"open");
        assert_eq!(
            tokens,
            vec![
                Token::BeginArray,
                Token::NumberLiteral(1.0),
                Token::ValueSeparator,
                Token::Blank,
            ]
        );
        assert_eq!(
            error,
            Some(LexError::new(LexErrorKind::UnterminatedString, 4))
        );
    }

    #[test]
    fn test_unrecognized_character() {
        let (tokens, error) = tokenize("[x]");
        assert_eq!(tokens, vec![Token::BeginArray]);
        assert_eq!(
            error,
            Some(LexError::new(LexErrorKind::NoGeneratorMatched, 1))
        );
        assert_eq!(
            error.map(|e| e.message()).as_deref(),
            Some("cannot continue: 1")
        );
    }

    #[test]
    fn test_bare_minus_is_a_number() {
        let (tokens, error) = tokenize("[-]");
        assert!(error.is_none());
        assert_eq!(
            tokens,
            vec![
                Token::BeginArray,
                Token::NumberLiteral(0.0),
                Token::EndArray
            ]
        );

        let (tokens, error) = tokenize("-x");
        assert_eq!(tokens, vec![Token::NumberLiteral(0.0)]);
        assert_eq!(
            error,
            Some(LexError::new(LexErrorKind::NoGeneratorMatched, 1))
        );
    }

    #[test]
    fn test_truncated_literal() {
        let (tokens, error) = tokenize("nul");
        assert!(tokens.is_empty());
        assert_eq!(
            error,
            Some(LexError::new(LexErrorKind::NoGeneratorMatched, 0))
        );
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        // "é" and "→" are multi-byte in UTF-8
        let (tokens, error) = Lexer::new().lex_spanned("[\"é→\", ?]");
        assert_eq!(
            tokens,
            vec![
                Spanned {
                    token: Token::BeginArray,
                    start: 0,
                    end: 1
                },
                Spanned {
                    token: Token::StringLiteral("é→".into()),
                    start: 1,
                    end: 5
                },
                Spanned {
                    token: Token::ValueSeparator,
                    start: 5,
                    end: 6
                },
                Spanned {
                    token: Token::Blank,
                    start: 6,
                    end: 7
                },
            ]
        );
        assert_eq!(
            error,
            Some(LexError::new(LexErrorKind::NoGeneratorMatched, 7))
        );
    }

    #[test]
    fn test_idempotent() {
        let lexer = Lexer::new();
        let input = "{\"a\": [1.5e2, \"b\\tc\", null]}";
        assert_eq!(lexer.lex(input), lexer.lex(input));
    }
}
