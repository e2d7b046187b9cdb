//! Lexer for stylesheet text.
//!
//! Converts input text into a stream of [`Token`]s. What counts as part of a
//! word depends on the previous token: after a `:` the lexer reads a whole
//! value (spaces included) up to the next `;`, elsewhere it stops at any
//! structural punctuation.

use super::token::{Token, TokenKind};

/// Identifier-character rule used for the next token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexMode {
    /// Selector names and property names.
    Selector,
    /// Declaration values, read right after a `:`.
    Value,
}

impl LexMode {
    /// Mode for the token following one of the given kind.
    pub fn after(kind: TokenKind) -> Self {
        match kind {
            TokenKind::StyleSeparator => Self::Value,
            _ => Self::Selector,
        }
    }

    /// Whether `c` continues a word in this mode.
    fn is_ident_char(self, c: char) -> bool {
        match self {
            Self::Value => !matches!(c, '\n' | '\t' | ':' | ';'),
            Self::Selector => !matches!(
                c,
                '\n' | '\t' | '\r' | ' ' | ':' | ';' | '#' | '.' | '{' | '}' | ','
            ),
        }
    }

    /// Whether `c` is skipped before a token in this mode.
    fn is_separator(self, c: char) -> bool {
        match c {
            ' ' | '\t' | '\r' | '\n' => true,
            // Commas only separate names in a selector list
            ',' => self == Self::Selector,
            _ => false,
        }
    }
}

/// Lexer for stylesheet text.
///
/// # Examples
///
/// ```
/// use stylemap::parser::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("a { color: red; }").collect();
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[4].value(), "red");
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            mode: LexMode::Selector,
        }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character, counting newlines.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Skip whitespace, and commas in selector context.
    fn skip_separators(&mut self, mode: LexMode) {
        while let Some(c) = self.peek() {
            if !mode.is_separator(c) {
                break;
            }
            self.advance();
        }
    }

    /// Read the next token using an explicit mode.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn next_token(&mut self, mode: LexMode) -> Option<Token> {
        self.skip_separators(mode);

        let line = self.line;
        let start = self.pos;
        let first = self.advance()?;

        if mode.is_ident_char(first) {
            while let Some(c) = self.peek() {
                if !mode.is_ident_char(c) {
                    break;
                }
                self.advance();
            }
        }

        let mut text = &self.input[start..self.pos];
        if mode == LexMode::Value {
            text = text.trim_end();
        }

        Some(Token::new(text, line))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token(self.mode)?;
        self.mode = LexMode::after(token.kind());
        Some(token)
    }
}

/// Tokenizes the whole input eagerly.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
