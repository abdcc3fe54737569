/*!
# `jsonlex` Library

Turns raw JSON text into a sequence of lexical tokens, reporting the first
syntax error with its character offset.

```rust
use jsonlex::tokenizer::{Token, tokenize};

let (tokens, error) = tokenize("[true, 1e3]");
assert!(error.is_none());
assert_eq!(tokens[4], Token::NumberLiteral(1000.0));
```
*/

pub mod commands;
pub mod tokenizer;
pub mod utils;
