//! # Tokenizer/ Lexer
//!
//! Splits JSON text into a token stream per RFC 4627, stopping at the first
//! lexical error.
pub mod error;
pub mod generator;
pub mod lexer;
pub mod token;

// Re-exports
pub use error::{LexError, LexErrorKind};
pub use generator::{Generator, GeneratorResult};
pub use lexer::{Lexer, tokenize};
pub use token::{Spanned, Token};
