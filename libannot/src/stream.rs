//! Token cursor with bounded backtracking.
//!
//! [`TokenStream`] is the positioned cursor the parser walks: peek-ahead,
//! consume, and explicit save/restore of the cursor position. The
//! save/restore pair is what lets the element reader speculatively read a
//! candidate key and rewind when the colon does not follow.

use crate::error::{ParseContext, ParseError, Result};
use crate::lexer::{tokenize, Token, TokenKind};

/// A saved cursor position, produced by [`TokenStream::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(usize);

/// A positioned, peekable cursor over the tokens of one annotation literal.
///
/// Create a fresh stream per annotation region; each parse call owns its
/// stream exclusively.
#[derive(Debug)]
pub struct TokenStream {
    source: String,
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Tokenize an annotation substring into a fresh stream.
    pub fn new(source: &str, ctx: &ParseContext) -> Result<Self> {
        let tokens = tokenize(source, ctx)?;
        Ok(Self {
            source: source.to_string(),
            tokens,
            pos: 0,
        })
    }

    /// Look at the current token without consuming it.
    ///
    /// Total: returns the end-of-input token once the stream is exhausted.
    pub fn peek(&self) -> &Token {
        self.peek_ahead(0)
    }

    /// Look `offset` tokens ahead without consuming.
    pub fn peek_ahead(&self, offset: usize) -> &Token {
        // The token vector always ends with an End token.
        let i = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[i]
    }

    /// Consume and return the current token.
    ///
    /// Fails with [`ParseError::EmptyInput`] past the end of input.
    pub fn advance(&mut self, ctx: &ParseContext) -> Result<Token> {
        let token = self.peek().clone();
        if token.kind == TokenKind::End {
            return Err(
                ParseError::EmptyInput(String::new()).with_location(ctx, token.line, token.col)
            );
        }
        self.pos += 1;
        Ok(token)
    }

    /// Save the cursor position for later backtracking.
    pub fn mark(&self) -> Marker {
        Marker(self.pos)
    }

    /// Rewind the cursor to a previously saved position.
    pub fn restore(&mut self, marker: Marker) {
        self.pos = marker.0;
    }

    /// Verbatim source text between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.source[start..end]
    }
}
