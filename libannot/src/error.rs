//! Error types for annotation literal parsing.

use thiserror::Error;

/// Result type for annotation literal parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying an optional source name for error reporting.
///
/// The source name is typically the file containing the documentation
/// comment the annotation was found in.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub source_name: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(source_name: Option<&str>) -> Self {
        Self {
            source_name: source_name.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self, line: usize, col: usize) -> String {
        match &self.source_name {
            Some(name) => format!(" at {}:{} of <{}>", line + 1, col + 1, name),
            None => format!(" at {}:{}", line + 1, col + 1),
        }
    }
}

/// Error type for annotation literal parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Consumed or parsed past the end of the token stream.
    #[error("Unexpected end of input{0}")]
    EmptyInput(String),

    /// The literal does not begin with an open brace.
    #[error("Expected '{{' to begin array literal, found \"{0}\"{1}")]
    ExpectedOpenBrace(String, String),

    /// A string ran to end of input without its closing quote.
    #[error("Unterminated string{0}")]
    UnterminatedString(String),

    /// End of input inside a still-open literal or value.
    #[error("Unbalanced braces{0}")]
    UnbalancedBraces(String),

    /// An element was not followed by a comma or closing brace.
    #[error("Expected ',' or '}}' after element, found \"{0}\"{1}")]
    ExpectedSeparator(String, String),

    /// Keyed and unkeyed elements mixed in one literal.
    #[error("Cannot mix keyed and unkeyed elements{0}")]
    MixedKeyedUnkeyed(String),

    /// Nesting exceeded the configured depth limit.
    #[error("Nesting depth limit of {0} exceeded{1}")]
    DepthLimitExceeded(usize, String),
}

impl ParseError {
    /// Attach location information to an error.
    pub fn with_location(self, ctx: &ParseContext, line: usize, col: usize) -> Self {
        let suffix = ctx.loc_suffix(line, col);
        match self {
            ParseError::EmptyInput(_) => ParseError::EmptyInput(suffix),
            ParseError::ExpectedOpenBrace(found, _) => ParseError::ExpectedOpenBrace(found, suffix),
            ParseError::UnterminatedString(_) => ParseError::UnterminatedString(suffix),
            ParseError::UnbalancedBraces(_) => ParseError::UnbalancedBraces(suffix),
            ParseError::ExpectedSeparator(found, _) => ParseError::ExpectedSeparator(found, suffix),
            ParseError::MixedKeyedUnkeyed(_) => ParseError::MixedKeyedUnkeyed(suffix),
            ParseError::DepthLimitExceeded(limit, _) => {
                ParseError::DepthLimitExceeded(limit, suffix)
            }
        }
    }
}
