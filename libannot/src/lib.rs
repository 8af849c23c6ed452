//! Parser for Doctrine-style annotation array literals.
//!
//! Annotations embedded in documentation comments carry `{ ... }` array
//! literals: either an ordered list (`{"value", "value2"}`) or a
//! key-ordered mapping (`{key: "value"}`). This crate parses one such
//! literal into a structured value while keeping every fragment verbatim —
//! values are never decoded, coerced, or evaluated, and quotes stay part of
//! the text.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Lexer**: Converts the annotation substring into a positioned token
//!    sequence (braces, commas, colons, quoted strings, bare words).
//!
//! 2. **Literal Parser**: Recursively parses the token stream into an
//!    [`ArrayValue`], using bounded backtracking to tell `key: value`
//!    elements apart from bare values.

mod error;
mod lexer;
mod options;
mod parser;
mod stream;
mod value;

pub use error::{ParseContext, ParseError, Result};
pub use lexer::{tokenize, Token, TokenKind};
pub use options::ParseOptions;
pub use parser::parse_stream;
pub use stream::{Marker, TokenStream};
pub use value::{ArrayValue, Value};

/// Parse an annotation array literal from a string.
///
/// # Example
///
/// ```
/// use libannot::parse;
///
/// let value = parse(r#"{key: "value"}"#).unwrap();
/// let entries = value.as_map().unwrap();
/// assert_eq!(entries.get("key").unwrap().as_scalar(), Some("\"value\""));
/// ```
pub fn parse(input: &str) -> Result<ArrayValue> {
    parse_with_source_name(input, None)
}

/// Parse an annotation array literal with a source name for error messages.
///
/// The source name is typically the file containing the documentation
/// comment the annotation was found in.
pub fn parse_with_source_name(input: &str, source_name: Option<&str>) -> Result<ArrayValue> {
    parse_with_options(input, source_name, &ParseOptions::default())
}

/// Parse an annotation array literal with explicit [`ParseOptions`].
pub fn parse_with_options(
    input: &str,
    source_name: Option<&str>,
    options: &ParseOptions,
) -> Result<ArrayValue> {
    let ctx = ParseContext::new(source_name);

    // Phase 1: Tokenize the annotation substring
    let mut stream = TokenStream::new(input, &ctx)?;

    // Phase 2: Parse tokens into a literal value
    parse_stream(&mut stream, &ctx, options)
}
