//! Error types for stylesheet parsing.
//!
//! Lexing never fails, so the only error the crate produces is a
//! [`SyntaxError`] raised by the parser state machine.

use thiserror::Error;

/// A token was found where the grammar does not allow it.
///
/// # Examples
///
/// ```rust
/// use stylemap::{parse_stylesheet, SyntaxError};
///
/// // Missing `:` between property and value
/// let err = parse_stylesheet("a { c 1; }").unwrap_err();
/// assert_eq!(err.line(), 1);
/// assert_eq!(err.token_text(), "1");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A token appeared in a state the grammar does not permit.
    #[error("line {line}: unexpected token {token}")]
    UnexpectedToken { line: usize, token: String },

    /// Input ended inside a block or after selector names with no block.
    ///
    /// `token` is the last token seen before the end.
    #[error("line {line}: unexpected end of input after {token}")]
    UnexpectedEndOfInput { line: usize, token: String },
}

impl SyntaxError {
    /// 1-based source line of the offending token.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::UnexpectedEndOfInput { line, .. } => *line,
        }
    }

    /// Literal text of the offending token.
    pub fn token_text(&self) -> &str {
        match self {
            Self::UnexpectedToken { token, .. } | Self::UnexpectedEndOfInput { token, .. } => {
                token
            }
        }
    }

    /// Human-readable description without the line prefix.
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { token, .. } => format!("unexpected token {token}"),
            Self::UnexpectedEndOfInput { token, .. } => {
                format!("unexpected end of input after {token}")
            }
        }
    }
}
