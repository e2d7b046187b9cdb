//! # stylemap
//!
//! Parses flat stylesheets into a map from selector to declarations.
//!
//! Input is a sequence of blocks, each preceded by one or more selectors:
//!
//! - Tag selectors: `div`
//! - Class selectors: `.box`
//! - ID selectors: `#main`
//! - Groups: `a, .b { ... }`
//!
//! Values are kept as opaque strings, so `border: 1px solid red;` maps
//! `border` to `"1px solid red"`. When a selector is declared again later in
//! the source, the new block can only add properties; values seen first are
//! kept.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylemap::{parse_stylesheet, SelectorKind};
//!
//! let source = r#"
//!     .box {
//!         color: red;
//!         border: 1px solid black;
//!     }
//!
//!     #main, div {
//!         width: 100%;
//!     }
//! "#;
//!
//! let sheet = parse_stylesheet(source).expect("valid stylesheet");
//! assert_eq!(sheet.len(), 3);
//! assert_eq!(sheet.get(".box").unwrap()["border"], "1px solid black");
//! assert_eq!(sheet.rules_of_kind(SelectorKind::Id).count(), 1);
//! ```
//!
//! ## Not Supported
//!
//! - Combinators and pseudo-classes (`a > b`, `a:hover`)
//! - At-rules (`@media`, `@import`)
//! - Comments
//!
//! ## Modules
//!
//! - [`parser`]: lexer, tokens and the parser state machine
//! - [`stylesheet`]: rules, declarations and the parsed stylesheet
//! - [`options`]: parser configuration
//! - [`error`]: syntax errors

pub mod error;
pub mod options;
pub mod parser;
pub mod stylesheet;

pub use error::SyntaxError;
pub use options::{EndOfInput, ParseOptions};
pub use parser::{parse_partial, parse_stylesheet, parse_stylesheet_with, tokenize};
pub use stylesheet::{Declarations, Rule, SelectorKind, Stylesheet};
