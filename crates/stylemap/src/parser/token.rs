//! Tokens produced by the lexer.

use std::fmt;

/// Syntactic category of a token, derived purely from its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    BlockStart,
    /// `}`
    BlockEnd,
    /// `.` or `#` in front of a selector name
    SelectorPrefix,
    /// `:` between property and value
    StyleSeparator,
    /// `;`
    StatementEnd,
    /// Any other text: selector names, property names, values.
    Value,
}

impl TokenKind {
    /// Classifies a token's text.
    pub fn of(text: &str) -> Self {
        match text {
            "{" => Self::BlockStart,
            "}" => Self::BlockEnd,
            ":" => Self::StyleSeparator,
            ";" => Self::StatementEnd,
            "." | "#" => Self::SelectorPrefix,
            _ => Self::Value,
        }
    }

    /// Diagnostic name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::BlockStart => "BLOCK_START",
            Self::BlockEnd => "BLOCK_END",
            Self::SelectorPrefix => "SELECTOR",
            Self::StyleSeparator => "STYLE_SEPARATOR",
            Self::StatementEnd => "STATEMENT_END",
            Self::Value => "VALUE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical unit with the line it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    value: String,
    line: usize,
}

impl Token {
    /// Create a token from its text and 1-based line.
    pub fn new(value: impl Into<String>, line: usize) -> Self {
        Self {
            value: value.into(),
            line,
        }
    }

    /// Literal token text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 1-based source line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Kind derived from the token text.
    pub fn kind(&self) -> TokenKind {
        TokenKind::of(&self.value)
    }
}
