//! # Lex Errors
//!
//! The fatal conditions that stop a lex pass.
use std::error::Error;
use std::fmt;

/// The class of failure that halted lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string reached the end of input before its closing quote.
    UnterminatedString,
    /// A `.` or exponent marker without a following digit, or a number with
    /// no digits at all.
    MalformedNumber,
    /// No generator recognizes the character at the cursor.
    NoGeneratorMatched,
}

/// A fatal lex error, located by the 0-based character offset at which
/// lexing became stuck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    kind: LexErrorKind,
    offset: usize,
}

impl LexError {
    /// Creates a new error of the given kind at `offset`.
    pub const fn new(kind: LexErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The class of failure.
    pub const fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Character offset into the input where the failure occurred.
    ///
    /// For strings and numbers this is where the token started, not where
    /// the scan gave up.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Human-readable message, embedding the offset.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnterminatedString => {
                write!(f, "\" is not match at position: {}", self.offset)
            }
            LexErrorKind::MalformedNumber => {
                write!(f, "not a valid number at position: {}", self.offset)
            }
            LexErrorKind::NoGeneratorMatched => {
                write!(f, "cannot continue: {}", self.offset)
            }
        }
    }
}
