//! Parser configuration.

/// What to do when input ends with unfinished state: an open block, or
/// selector names that never got one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndOfInput {
    /// Report an [`UnexpectedEndOfInput`](crate::SyntaxError::UnexpectedEndOfInput) error.
    #[default]
    Reject,
    /// Drop the unfinished state and keep what was already committed.
    Discard,
}

/// Options controlling a parse.
///
/// ```
/// use stylemap::{parse_stylesheet_with, ParseOptions};
///
/// let sheet = parse_stylesheet_with("a { c: 1; } b { d: 2;", &ParseOptions::lenient()).unwrap();
/// assert!(sheet.contains("a"));
/// assert!(!sheet.contains("b"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub end_of_input: EndOfInput,
}

impl ParseOptions {
    /// Unfinished input is a syntax error. Same as `default()`.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Unfinished input is silently dropped.
    pub fn lenient() -> Self {
        Self {
            end_of_input: EndOfInput::Discard,
        }
    }

    pub fn with_end_of_input(mut self, end_of_input: EndOfInput) -> Self {
        self.end_of_input = end_of_input;
        self
    }
}
