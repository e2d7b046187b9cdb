//! Parser state machine.
//!
//! Drains the token sequence front to back. The grammar is checked one
//! transition at a time against the kind of the previous token.

use crate::error::SyntaxError;
use crate::options::{EndOfInput, ParseOptions};
use crate::stylesheet::{Declarations, Rule, Stylesheet};

use super::lexer::tokenize;
use super::token::{Token, TokenKind};

/// Parses stylesheet text with strict options.
///
/// # Examples
///
/// ```
/// use stylemap::parse_stylesheet;
///
/// let sheet = parse_stylesheet(b"a { c: 1; } a { c: 2; d: 3; }").unwrap();
/// let a = sheet.get("a").unwrap();
/// assert_eq!(a["c"], "1");
/// assert_eq!(a["d"], "3");
/// ```
pub fn parse_stylesheet(raw: impl AsRef<[u8]>) -> Result<Stylesheet, SyntaxError> {
    parse_stylesheet_with(raw, &ParseOptions::default())
}

/// Parses stylesheet text with the given options.
pub fn parse_stylesheet_with(
    raw: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> Result<Stylesheet, SyntaxError> {
    match parse_partial(raw, options) {
        (stylesheet, None) => Ok(stylesheet),
        (_, Some(err)) => Err(err),
    }
}

/// Parses stylesheet text, keeping the blocks completed before any error.
///
/// ```
/// use stylemap::{parse_partial, ParseOptions};
///
/// let (sheet, err) = parse_partial("a { c: 1; } b { d 2; }", &ParseOptions::default());
/// assert!(sheet.contains("a"));
/// assert!(!sheet.contains("b"));
/// assert_eq!(err.unwrap().token_text(), "2");
/// ```
pub fn parse_partial(
    raw: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> (Stylesheet, Option<SyntaxError>) {
    let text = String::from_utf8_lossy(raw.as_ref());
    let tokens = tokenize(&text);
    run(tokens, options)
}

/// Runs the state machine over an already tokenized input.
pub fn parse_tokens<I>(tokens: I, options: &ParseOptions) -> Result<Stylesheet, SyntaxError>
where
    I: IntoIterator<Item = Token>,
{
    match run(tokens, options) {
        (stylesheet, None) => Ok(stylesheet),
        (_, Some(err)) => Err(err),
    }
}

fn run<I>(tokens: I, options: &ParseOptions) -> (Stylesheet, Option<SyntaxError>)
where
    I: IntoIterator<Item = Token>,
{
    let mut parser = Parser::new();
    let mut count = 0usize;

    for token in tokens {
        count += 1;
        if let Err(err) = parser.process_token(token) {
            log::debug!("parse stopped after {count} tokens: {err}");
            return (parser.css, Some(err));
        }
    }

    let result = parser.finish(options);
    log::debug!(
        "parsed {count} tokens into {} rules",
        parser.css.len()
    );
    (parser.css, result.err())
}

/// Accumulator for a single parse call.
struct Parser {
    /// Selector names waiting for the current block.
    selectors: Vec<String>,
    /// `.` or `#` waiting for its name.
    prefix: Option<String>,
    property: String,
    value: String,
    in_block: bool,
    /// Declarations of the current block.
    declarations: Declarations,
    /// `None` until the first token.
    prev: Option<TokenKind>,
    last: Option<Token>,
    css: Stylesheet,
}

impl Parser {
    fn new() -> Self {
        Self {
            selectors: Vec::new(),
            prefix: None,
            property: String::new(),
            value: String::new(),
            in_block: false,
            declarations: Declarations::new(),
            prev: None,
            last: None,
            css: Stylesheet::new(),
        }
    }

    fn process_token(&mut self, token: Token) -> Result<(), SyntaxError> {
        let kind = token.kind();
        log::trace!(
            "line {}: {} {:?} after {}",
            token.line(),
            kind,
            token.value(),
            self.prev.map_or("FIRST_TOKEN", TokenKind::name)
        );

        match kind {
            TokenKind::Value => self.process_value(&token)?,
            TokenKind::SelectorPrefix => {
                // Nothing inside a block can take a selector name
                if self.in_block {
                    return Err(unexpected(&token));
                }
                self.prefix = Some(token.value().to_string());
            }
            TokenKind::StyleSeparator => {
                if !self.in_block || self.prev != Some(TokenKind::Value) {
                    return Err(unexpected(&token));
                }
            }
            TokenKind::BlockStart => {
                if self.in_block || self.prev != Some(TokenKind::Value) {
                    return Err(unexpected(&token));
                }
                self.in_block = true;
            }
            TokenKind::StatementEnd => {
                if !self.in_block
                    || self.prev != Some(TokenKind::Value)
                    || self.property.is_empty()
                    || self.value.is_empty()
                {
                    return Err(unexpected(&token));
                }
                self.declarations
                    .insert(self.property.clone(), self.value.clone());
            }
            TokenKind::BlockEnd => {
                if !self.in_block {
                    return Err(unexpected(&token));
                }
                self.close_block();
            }
        }

        self.prev = Some(kind);
        self.last = Some(token);
        Ok(())
    }

    fn process_value(&mut self, token: &Token) -> Result<(), SyntaxError> {
        let text = token.value();
        match self.prev {
            None | Some(TokenKind::BlockEnd) => self.selectors.push(text.to_string()),
            Some(TokenKind::SelectorPrefix) => {
                let prefix = self.prefix.take().unwrap_or_default();
                self.selectors.push(prefix + text);
            }
            Some(TokenKind::BlockStart) | Some(TokenKind::StatementEnd) => {
                self.property = text.to_string();
                self.value.clear();
            }
            Some(TokenKind::StyleSeparator) => self.value = text.to_string(),
            // Bare names in a row form a selector group
            Some(TokenKind::Value) if !self.in_block => self.selectors.push(text.to_string()),
            _ => return Err(unexpected(token)),
        }
        Ok(())
    }

    fn close_block(&mut self) {
        let declarations = std::mem::take(&mut self.declarations);
        for name in self.selectors.drain(..) {
            self.css.merge(Rule::new(name), &declarations);
        }
        self.property.clear();
        self.value.clear();
        self.in_block = false;
    }

    fn finish(&self, options: &ParseOptions) -> Result<(), SyntaxError> {
        let unfinished = self.in_block || !self.selectors.is_empty() || self.prefix.is_some();
        let Some(last) = self.last.as_ref().filter(|_| unfinished) else {
            return Ok(());
        };

        match options.end_of_input {
            EndOfInput::Reject => Err(SyntaxError::UnexpectedEndOfInput {
                line: last.line(),
                token: last.value().to_string(),
            }),
            EndOfInput::Discard => {
                log::debug!(
                    "discarding unfinished input for {} selector(s)",
                    self.selectors.len()
                );
                Ok(())
            }
        }
    }
}

fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        line: token.line(),
        token: token.value().to_string(),
    }
}
