//! # Token Generators
//!
//! Each generator recognizes one family of tokens at a given character offset
//! of the input. The lexer tries them in [`Generator::PRIORITY`] order and the
//! first one that does not answer [`GeneratorResult::NoMatch`] decides the
//! outcome at that position.
use crate::tokenizer::{LexError, LexErrorKind, Token};

/// The fixed literal words, checked in this order.
const CONST_WORDS: [(&str, Token); 9] = [
    ("null", Token::Null),
    ("true", Token::True),
    ("false", Token::False),
    ("[", Token::BeginArray),
    ("]", Token::EndArray),
    ("{", Token::BeginObject),
    ("}", Token::EndObject),
    (":", Token::NameSeparator),
    (",", Token::ValueSeparator),
];

/// Outcome of running a single generator at an offset.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorResult {
    /// The generator does not apply here; the offset is unchanged.
    NoMatch,
    /// A token was recognized; the second field is the offset one past it.
    Matched(Token, usize),
    /// The generator applies but the input is malformed. Lexing stops.
    Fatal(LexError),
}

/// A scanning rule for one token family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// One of `\r`, `\n`, space or tab, one character at a time
    Whitespace,
    /// `null`, `true`, `false` and the structural punctuation
    ConstWord,
    /// A double-quoted string with simple escapes
    String,
    /// A number: `-? digits* (. digits+)? ([eE] [+-]? digits+)?`
    Number,
}

impl Generator {
    /// The order in which generators are tried at every cursor position.
    pub const PRIORITY: [Self; 4] =
        [Self::Whitespace, Self::ConstWord, Self::String, Self::Number];

    /// Runs this generator against `input` at `offset`.
    ///
    /// `input` is the pre-decoded sequence of Unicode scalar values, so
    /// offsets count characters rather than bytes.
    pub fn generate(self, input: &[char], offset: usize) -> GeneratorResult {
        match self {
            Self::Whitespace => whitespace(input, offset),
            Self::ConstWord => const_word(input, offset),
            Self::String => string(input, offset),
            Self::Number => number(input, offset),
        }
    }
}

fn whitespace(input: &[char], offset: usize) -> GeneratorResult {
    match input.get(offset) {
        Some('\r' | '\n' | ' ' | '\t') => {
            GeneratorResult::Matched(Token::Blank, offset + 1)
        }
        _ => GeneratorResult::NoMatch,
    }
}

fn const_word(input: &[char], offset: usize) -> GeneratorResult {
    let rest = input.get(offset..).unwrap_or_default();
    for (word, token) in &CONST_WORDS {
        let mut chars = rest.iter();
        if word.chars().all(|c| chars.next() == Some(&c)) {
            return GeneratorResult::Matched(
                token.clone(),
                offset + word.chars().count(),
            );
        }
    }
    GeneratorResult::NoMatch
}

/// Maps the character after a backslash to the character it stands for.
///
/// `\u` is not listed: Unicode escapes are kept as written.
const fn unescape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

fn string(input: &[char], offset: usize) -> GeneratorResult {
    if input.get(offset) != Some(&'"') {
        return GeneratorResult::NoMatch;
    }

    let mut value = String::new();
    let mut cursor = offset + 1;
    while let Some(&current) = input.get(cursor) {
        if current == '"' {
            return GeneratorResult::Matched(
                Token::StringLiteral(value),
                cursor + 1,
            );
        }
        if current == '\\' {
            if let Some(escaped) =
                input.get(cursor + 1).copied().and_then(unescape)
            {
                value.push(escaped);
                cursor += 2;
                continue;
            }
        }
        // unrecognized escapes fall through and are kept literally
        value.push(current);
        cursor += 1;
    }

    GeneratorResult::Fatal(LexError::new(
        LexErrorKind::UnterminatedString,
        offset,
    ))
}

/// Advances `cursor` over a run of ASCII digits, returning how many were
/// consumed.
fn read_digits(input: &[char], cursor: &mut usize) -> usize {
    let start = *cursor;
    while input.get(*cursor).is_some_and(char::is_ascii_digit) {
        *cursor += 1;
    }
    *cursor - start
}

fn number(input: &[char], offset: usize) -> GeneratorResult {
    let Some(&first) = input.get(offset) else {
        return GeneratorResult::NoMatch;
    };
    if first != '-' && !first.is_ascii_digit() {
        return GeneratorResult::NoMatch;
    }

    let malformed = || {
        GeneratorResult::Fatal(LexError::new(
            LexErrorKind::MalformedNumber,
            offset,
        ))
    };

    let mut cursor = offset + 1;
    // leading zeros are accepted: "0123" lexes as 123
    let mut mantissa_digits = usize::from(first != '-');
    mantissa_digits += read_digits(input, &mut cursor);

    if input.get(cursor) == Some(&'.') {
        cursor += 1;
        let fraction_digits = read_digits(input, &mut cursor);
        if fraction_digits == 0 {
            return malformed();
        }
        mantissa_digits += fraction_digits;
    }

    if matches!(input.get(cursor), Some('e' | 'E')) {
        cursor += 1;
        if matches!(input.get(cursor), Some('+' | '-')) {
            cursor += 1;
        }
        if read_digits(input, &mut cursor) == 0 {
            return malformed();
        }
    }

    // a lone '-' (or '-e5') carries no digits and reads as zero
    if mantissa_digits == 0 {
        return GeneratorResult::Matched(Token::NumberLiteral(-0.0), cursor);
    }

    let literal: String = input[offset..cursor].iter().collect();
    literal.parse::<f64>().map_or_else(
        |_| malformed(),
        |value| GeneratorResult::Matched(Token::NumberLiteral(value), cursor),
    )
}
