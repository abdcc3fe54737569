//! # JSON Token
//!
//! Defines the lexical units produced from a JSON document.
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

/// Represents a token value from a JSON document, per RFC 4627.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    /* Structural */
    /// Opening square bracket
    BeginArray,

    /// Closing square bracket
    EndArray,

    /// Opening curly brace
    BeginObject,

    /// Closing curly brace
    EndObject,

    /// Colon character
    NameSeparator,

    /// Comma character
    ValueSeparator,

    /* Values */
    /// String value, with escape sequences already replaced
    StringLiteral(String),

    /// Numeric value
    NumberLiteral(#[serde(serialize_with = "serialize_number")] f64),

    /// `true` literal
    True,

    /// `false` literal
    False,

    /// `null` literal
    Null,

    /* Insignificant */
    /// A single whitespace character
    Blank,
}

/// JSON has no non-finite numbers; overflowed literals (`1e999`) are written
/// as `"inf"` / `"-inf"` instead of serde_json's `null`.
fn serialize_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl Token {
    /// Returns the name of the token variant, e.g. `"BeginObject"`.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::BeginArray => "BeginArray",
            Self::EndArray => "EndArray",
            Self::BeginObject => "BeginObject",
            Self::EndObject => "EndObject",
            Self::NameSeparator => "NameSeparator",
            Self::ValueSeparator => "ValueSeparator",
            Self::StringLiteral(_) => "StringLiteral",
            Self::NumberLiteral(_) => "NumberLiteral",
            Self::True => "True",
            Self::False => "False",
            Self::Null => "Null",
            Self::Blank => "Blank",
        }
    }

    /// Whether this token is insignificant whitespace.
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeginArray => write!(f, "["),
            Self::EndArray => write!(f, "]"),
            Self::BeginObject => write!(f, "{{"),
            Self::EndObject => write!(f, "}}"),
            Self::NameSeparator => write!(f, ":"),
            Self::ValueSeparator => write!(f, ","),
            // NOTE: Re-serialize to get proper JSON escaping and quoting.
            Self::StringLiteral(text) => {
                let quoted =
                    serde_json::to_string(text).map_err(|_| fmt::Error)?;
                write!(f, "{quoted}")
            }
            Self::NumberLiteral(value) => write!(f, "{value}"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Null => write!(f, "null"),
            Self::Blank => write!(f, " "),
        }
    }
}

/// A token together with the `[start, end)` character offsets it was read
/// from.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Spanned {
    /// The token itself
    pub token: Token,
    /// Offset of the first character of the token
    pub start: usize,
    /// Offset one past the last character of the token
    pub end: usize,
}
