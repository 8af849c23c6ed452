//! Phase 2: Array Literal Parser
//!
//! Drives the `{ ... }` grammar over a token stream. A literal is either an
//! ordered list (`{"a", "b"}`) or a key-ordered mapping (`{key: "value"}`);
//! the mode is decided by the first element and fixed for the rest of the
//! body. Element values are kept verbatim: a nested open brace recurses
//! into this parser, everything else accumulates into an opaque scalar.

use indexmap::IndexMap;

use crate::error::{ParseContext, ParseError, Result};
use crate::lexer::TokenKind;
use crate::options::ParseOptions;
use crate::stream::TokenStream;
use crate::value::{ArrayValue, Value};

/// Parse one annotation array literal from the stream.
///
/// The stream must be positioned at the opening brace. On success the
/// cursor rests just past the matching close brace, so a caller embedding
/// the literal in a larger token sequence can continue from there.
pub fn parse_stream(
    stream: &mut TokenStream,
    ctx: &ParseContext,
    options: &ParseOptions,
) -> Result<ArrayValue> {
    parse_literal(stream, ctx, options, 0)
}

/// Elements accumulated for one literal body until its mode is known.
enum Mode {
    Undetermined,
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

fn parse_literal(
    stream: &mut TokenStream,
    ctx: &ParseContext,
    options: &ParseOptions,
    depth: usize,
) -> Result<ArrayValue> {
    let open = stream.peek().clone();
    match open.kind {
        TokenKind::OpenBrace => {}
        TokenKind::End => {
            return Err(
                ParseError::EmptyInput(String::new()).with_location(ctx, open.line, open.col)
            );
        }
        _ => {
            return Err(ParseError::ExpectedOpenBrace(open.text.clone(), String::new())
                .with_location(ctx, open.line, open.col));
        }
    }
    if depth >= options.max_depth {
        return Err(ParseError::DepthLimitExceeded(options.max_depth, String::new())
            .with_location(ctx, open.line, open.col));
    }
    stream.advance(ctx)?;

    if stream.peek().kind == TokenKind::CloseBrace {
        stream.advance(ctx)?;
        return Ok(ArrayValue::List(Vec::new()));
    }

    let mut mode = Mode::Undetermined;
    loop {
        let at = stream.peek().clone();
        let (key, value) = read_element(stream, ctx, options, depth)?;

        match (key, &mut mode) {
            (Some(key), Mode::Undetermined) => {
                let mut entries = IndexMap::new();
                entries.insert(key, value);
                mode = Mode::Map(entries);
            }
            (Some(key), Mode::Map(entries)) => {
                // A repeated key keeps its position; the last value wins.
                entries.insert(key, value);
            }
            (None, Mode::Undetermined) => {
                mode = Mode::List(vec![value]);
            }
            (None, Mode::List(items)) => {
                items.push(value);
            }
            (Some(_), Mode::List(_)) | (None, Mode::Map(_)) => {
                return Err(ParseError::MixedKeyedUnkeyed(String::new())
                    .with_location(ctx, at.line, at.col));
            }
        }

        match stream.peek().kind {
            TokenKind::Comma => {
                stream.advance(ctx)?;
                // Trailing comma directly before the close brace.
                if stream.peek().kind == TokenKind::CloseBrace {
                    stream.advance(ctx)?;
                    break;
                }
            }
            TokenKind::CloseBrace => {
                stream.advance(ctx)?;
                break;
            }
            TokenKind::End => {
                let t = stream.peek();
                return Err(
                    ParseError::UnbalancedBraces(String::new()).with_location(ctx, t.line, t.col)
                );
            }
            _ => {
                let t = stream.peek();
                return Err(ParseError::ExpectedSeparator(t.text.clone(), String::new())
                    .with_location(ctx, t.line, t.col));
            }
        }
    }

    Ok(match mode {
        Mode::Undetermined => ArrayValue::List(Vec::new()),
        Mode::List(items) => ArrayValue::List(items),
        Mode::Map(entries) => ArrayValue::Map(entries),
    })
}

/// Read one element: an optional `key:` prefix and a value.
///
/// Key detection is a bounded one-token lookahead with backtracking: a
/// single word or string token directly followed by a colon is a key (raw
/// text, quotes preserved). Anything else rewinds, and the whole element is
/// read as a value from the saved position.
fn read_element(
    stream: &mut TokenStream,
    ctx: &ParseContext,
    options: &ParseOptions,
    depth: usize,
) -> Result<(Option<String>, Value)> {
    let first = stream.peek().clone();
    if first.kind == TokenKind::End {
        return Err(
            ParseError::UnbalancedBraces(String::new()).with_location(ctx, first.line, first.col)
        );
    }

    if matches!(first.kind, TokenKind::Word | TokenKind::Str) {
        let mark = stream.mark();
        stream.advance(ctx)?;
        if stream.peek().kind == TokenKind::Colon {
            stream.advance(ctx)?;
            let value = read_value(stream, ctx, options, depth)?;
            return Ok((Some(first.text), value));
        }
        stream.restore(mark);
    }

    let value = read_value(stream, ctx, options, depth)?;
    Ok((None, value))
}

fn read_value(
    stream: &mut TokenStream,
    ctx: &ParseContext,
    options: &ParseOptions,
    depth: usize,
) -> Result<Value> {
    if stream.peek().kind == TokenKind::OpenBrace {
        let nested = parse_literal(stream, ctx, options, depth + 1)?;
        return Ok(Value::Nested(nested));
    }
    read_scalar(stream, ctx)
}

/// Scan a scalar: raw tokens up to a comma or close brace at brace depth
/// zero. The terminator is left for the literal loop to inspect. The scalar
/// text is the verbatim source slice spanning the consumed tokens, interior
/// spacing included.
fn read_scalar(stream: &mut TokenStream, ctx: &ParseContext) -> Result<Value> {
    let start = stream.peek().offset;
    let mut end = start;
    let mut depth = 0usize;

    loop {
        let t = stream.peek().clone();
        match t.kind {
            TokenKind::End => {
                return Err(
                    ParseError::UnbalancedBraces(String::new()).with_location(ctx, t.line, t.col)
                );
            }
            TokenKind::Comma | TokenKind::CloseBrace if depth == 0 => break,
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => depth -= 1,
            _ => {}
        }
        let consumed = stream.advance(ctx)?;
        end = consumed.offset + consumed.text.len();
    }

    Ok(Value::Scalar(stream.slice(start, end).to_string()))
}
