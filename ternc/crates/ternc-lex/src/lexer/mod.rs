//! Lexer module.
//!
//! The lexer implementation is split by character category:
//! - `core` - Main Lexer struct, dispatch, and the tokenize front ends
//! - `delimiter` - Delimiter and newline lexing
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Operator lexing with one character of lookahead
//! - `string` - String literal lexing

mod core;
mod delimiter;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, Recovered, Tokens};
