//! A recovering JSON parser.
//!
//! Unlike a strict deserializer, this parser never fails: malformed
//! input yields diagnostics plus the best tree it could build, with
//! null placeholders standing in for missing values. Editors need a
//! tree for every keystroke, including half-typed ones.

use lodestone_foundation::{Context, Diagnostic, Range, Reader, quote};

use crate::node::{JsonNode, JsonProperty, JsonValue};

/// Nesting depth past which the parser stops recursing and reports
/// the value as too deep.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses one JSON value from the reader.
///
/// Consumes exactly the value (plus leading whitespace); anything
/// after it is left for the caller. Problems are reported through
/// `ctx` rather than returned.
pub fn parse_value(reader: &mut Reader<'_>, ctx: &mut Context) -> JsonNode {
    value_at_depth(reader, ctx, 0)
}

/// Parses `text` as one complete JSON document.
///
/// Anything left over after the value is reported as trailing data.
#[must_use]
pub fn parse_str(text: &str) -> (JsonNode, Vec<Diagnostic>) {
    tracing::debug!(bytes = text.len(), "parsing json document");
    let mut reader = Reader::new(text);
    let mut ctx = Context::new();
    let node = parse_value(&mut reader, &mut ctx);
    skip_whitespace(&mut reader);
    if reader.can_read() {
        let start = reader.offset();
        let rest = reader.read_while(|_| true);
        let rest = quote(rest);
        let message = ctx.localize("json.trailing", &[&rest]);
        ctx.err.error(message, Range::new(start, reader.offset()));
    }
    (node, ctx.err.into_diagnostics())
}

fn value_at_depth(reader: &mut Reader<'_>, ctx: &mut Context, depth: usize) -> JsonNode {
    skip_whitespace(reader);
    if depth >= MAX_NESTING_DEPTH {
        let range = Range::at(reader.offset());
        let message = ctx.localize("json.too-deep", &[]);
        ctx.err.error(message, range);
        return JsonNode::null(range);
    }
    match reader.peek() {
        Some('{') => object(reader, ctx, depth),
        Some('[') => array(reader, ctx, depth),
        Some('"') => string(reader, ctx),
        Some(c) if c == '-' || c.is_ascii_digit() => number(reader, ctx),
        _ => keyword(reader, ctx),
    }
}

fn skip_whitespace(reader: &mut Reader<'_>) {
    while matches!(reader.peek(), Some(' ' | '\t' | '\n' | '\r')) {
        reader.advance();
    }
}

fn object(reader: &mut Reader<'_>, ctx: &mut Context, depth: usize) -> JsonNode {
    let start = reader.offset();
    reader.advance();
    let mut properties = Vec::new();
    skip_whitespace(reader);
    if reader.peek() == Some('}') {
        reader.advance();
    } else {
        loop {
            skip_whitespace(reader);
            if !reader.can_read() {
                let message = ctx.localize("json.unclosed-object", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
                break;
            }
            if reader.peek() == Some('}') {
                // Dangling comma before the closing brace.
                let message = ctx.localize("json.expected-key", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
                reader.advance();
                break;
            }
            if reader.peek() != Some('"') {
                let message = ctx.localize("json.expected-key", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
                break;
            }
            let (key, key_range) = string_literal(reader, ctx);
            skip_whitespace(reader);
            if !reader.try_skip(":") {
                let message = ctx.localize("json.expected-colon", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
            }
            skip_whitespace(reader);
            let value_start = reader.offset();
            let value = if matches!(reader.peek(), Some(',' | '}') | None) {
                // The key survives without a value so that completion
                // still sees it.
                let message = ctx.localize("json.expected-value", &[]);
                ctx.err.error(message, Range::at(value_start));
                None
            } else {
                Some(value_at_depth(reader, ctx, depth + 1))
            };
            let end = value.as_ref().map_or(value_start, |node| node.range.end);
            properties.push(JsonProperty {
                range: Range::new(key_range.start, end),
                key,
                key_range,
                value,
            });
            skip_whitespace(reader);
            match reader.peek() {
                Some(',') => {
                    reader.advance();
                }
                Some('}') => {
                    reader.advance();
                    break;
                }
                _ => {
                    let message = ctx.localize("json.unclosed-object", &[]);
                    ctx.err.error(message, Range::at(reader.offset()));
                    break;
                }
            }
        }
    }
    JsonNode::new(Range::new(start, reader.offset()), JsonValue::Object(properties))
}

fn array(reader: &mut Reader<'_>, ctx: &mut Context, depth: usize) -> JsonNode {
    let start = reader.offset();
    reader.advance();
    let mut items = Vec::new();
    skip_whitespace(reader);
    if reader.peek() == Some(']') {
        reader.advance();
    } else {
        loop {
            skip_whitespace(reader);
            if !reader.can_read() {
                let message = ctx.localize("json.unclosed-array", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
                break;
            }
            if reader.peek() == Some(']') {
                // Dangling comma before the closing bracket.
                let message = ctx.localize("json.expected-value", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
                reader.advance();
                break;
            }
            items.push(value_at_depth(reader, ctx, depth + 1));
            skip_whitespace(reader);
            match reader.peek() {
                Some(',') => {
                    reader.advance();
                }
                Some(']') => {
                    reader.advance();
                    break;
                }
                _ => {
                    let message = ctx.localize("json.unclosed-array", &[]);
                    ctx.err.error(message, Range::at(reader.offset()));
                    break;
                }
            }
        }
    }
    JsonNode::new(Range::new(start, reader.offset()), JsonValue::Array(items))
}

fn string(reader: &mut Reader<'_>, ctx: &mut Context) -> JsonNode {
    let (value, range) = string_literal(reader, ctx);
    JsonNode::new(range, JsonValue::String(value))
}

/// Reads a quoted string literal, resolving escapes. The reader must
/// be positioned on the opening quote. Strings do not span lines.
fn string_literal(reader: &mut Reader<'_>, ctx: &mut Context) -> (String, Range) {
    let start = reader.offset();
    reader.advance();
    let mut value = String::new();
    let mut closed = false;
    while let Some(c) = reader.peek() {
        if c == '\n' || c == '\r' {
            break;
        }
        if c == '"' {
            reader.advance();
            closed = true;
            break;
        }
        if c == '\\' {
            let escape_start = reader.offset();
            reader.advance();
            escape(reader, ctx, escape_start, &mut value);
            continue;
        }
        value.push(c);
        reader.advance();
    }
    let range = Range::new(start, reader.offset());
    if !closed {
        let message = ctx.localize("json.unclosed-string", &[]);
        ctx.err.error(message, range);
    }
    (value, range)
}

fn escape(reader: &mut Reader<'_>, ctx: &mut Context, start: usize, value: &mut String) {
    let Some(c) = reader.peek() else {
        let raw = quote("\\");
        let message = ctx.localize("json.invalid-escape", &[&raw]);
        ctx.err.error(message, Range::new(start, reader.offset()));
        return;
    };
    reader.advance();
    let resolved = match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'u' => unicode_escape(reader),
        _ => None,
    };
    match resolved {
        Some(resolved) => value.push(resolved),
        None => {
            let range = Range::new(start, reader.offset());
            let raw = quote(range.text(reader.source()));
            let message = ctx.localize("json.invalid-escape", &[&raw]);
            ctx.err.error(message, range);
        }
    }
}

fn unicode_escape(reader: &mut Reader<'_>) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..4 {
        let digit = reader.peek()?.to_digit(16)?;
        reader.advance();
        code = code * 16 + digit;
    }
    char::from_u32(code)
}

fn number(reader: &mut Reader<'_>, ctx: &mut Context) -> JsonNode {
    let start = reader.offset();
    let raw = reader.read_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
    let range = Range::new(start, reader.offset());
    let integer = !raw.contains(['.', 'e', 'E']);
    match raw.parse::<f64>() {
        Ok(value) => JsonNode::new(range, JsonValue::Number { value, integer }),
        Err(_) => {
            let raw = quote(raw);
            let message = ctx.localize("json.invalid-number", &[&raw]);
            ctx.err.error(message, range);
            JsonNode::new(
                range,
                JsonValue::Number {
                    value: 0.0,
                    integer: false,
                },
            )
        }
    }
}

fn keyword(reader: &mut Reader<'_>, ctx: &mut Context) -> JsonNode {
    let start = reader.offset();
    if reader.try_skip("true") {
        return JsonNode::new(Range::new(start, reader.offset()), JsonValue::Boolean(true));
    }
    if reader.try_skip("false") {
        return JsonNode::new(Range::new(start, reader.offset()), JsonValue::Boolean(false));
    }
    if reader.try_skip("null") {
        return JsonNode::new(Range::new(start, reader.offset()), JsonValue::Null);
    }
    let range = Range::at(start);
    let message = ctx.localize("json.expected-value", &[]);
    ctx.err.error(message, range);
    JsonNode::null(range)
}
