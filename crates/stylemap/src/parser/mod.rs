//! Lexer and parser for flat stylesheets.
//!
//! - [`Lexer`] / [`tokenize`]: raw text to [`Token`]s
//! - [`parse_stylesheet`]: tokens to a [`Stylesheet`](crate::Stylesheet)

mod lexer;
mod machine;
mod token;

pub use lexer::{LexMode, Lexer, tokenize};
pub use machine::{parse_partial, parse_stylesheet, parse_stylesheet_with, parse_tokens};
pub use token::{Token, TokenKind};
