//! The built-in argument parsers.
//!
//! Numeric bounds, string flavors, and other knobs come from the
//! grammar node's `properties`, so one parser type serves every node
//! that names it. Out-of-range and malformed-but-scannable values
//! report diagnostics and still produce a value; a parser fails hard
//! only when it cannot consume anything at all.

use lodestone_foundation::{Context, Failure, ParseResult, Range, Reader, quote};
use lodestone_json::{parse_value, rich_text};
use lodestone_tree::TreeNode;

use crate::argument::ArgumentParser;
use crate::node::ArgumentValue;

/// `brigadier:bool`: the keywords `true` and `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolParser;

impl ArgumentParser for BoolParser {
    fn parse(
        &self,
        _node: &TreeNode,
        reader: &mut Reader<'_>,
        _ctx: &mut Context,
    ) -> ParseResult<ArgumentValue> {
        let checkpoint = reader.checkpoint();
        match reader.read_unquoted() {
            "true" => Ok(ArgumentValue::Boolean(true)),
            "false" => Ok(ArgumentValue::Boolean(false)),
            _ => {
                reader.restore(checkpoint);
                Err(Failure)
            }
        }
    }
}

/// `brigadier:integer`: a 32-bit integer with optional `min`/`max`
/// properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerParser;

impl ArgumentParser for IntegerParser {
    fn parse(
        &self,
        node: &TreeNode,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<ArgumentValue> {
        let start = reader.offset();
        let raw = reader.read_while(|c| c.is_ascii_digit() || c == '-');
        if raw.is_empty() {
            return Err(Failure);
        }
        let range = Range::new(start, reader.offset());
        let value = match raw.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                let raw = quote(raw);
                let message = ctx.localize("argument.invalid-number", &[&raw]);
                ctx.err.error(message, range);
                0
            }
        };
        check_bounds(node, f64::from(value), range, ctx);
        Ok(ArgumentValue::Integer(value))
    }
}

/// `brigadier:float`: a 32-bit float with optional `min`/`max`
/// properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatParser;

impl ArgumentParser for FloatParser {
    fn parse(
        &self,
        node: &TreeNode,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<ArgumentValue> {
        let start = reader.offset();
        let raw = scan_decimal(reader);
        if raw.is_empty() {
            return Err(Failure);
        }
        let range = Range::new(start, reader.offset());
        let value = match raw.parse::<f32>() {
            Ok(value) => value,
            Err(_) => {
                report_invalid_number(raw, range, ctx);
                0.0
            }
        };
        check_bounds(node, f64::from(value), range, ctx);
        Ok(ArgumentValue::Float(value))
    }
}

/// `brigadier:double`: a 64-bit float with optional `min`/`max`
/// properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleParser;

impl ArgumentParser for DoubleParser {
    fn parse(
        &self,
        node: &TreeNode,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<ArgumentValue> {
        let start = reader.offset();
        let raw = scan_decimal(reader);
        if raw.is_empty() {
            return Err(Failure);
        }
        let range = Range::new(start, reader.offset());
        let value = match raw.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                report_invalid_number(raw, range, ctx);
                0.0
            }
        };
        check_bounds(node, value, range, ctx);
        Ok(ArgumentValue::Double(value))
    }
}

/// `brigadier:string`: `word` (the default), `greedy`, or `quotable`
/// per the node's `type` property.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringParser;

impl ArgumentParser for StringParser {
    fn parse(
        &self,
        node: &TreeNode,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<ArgumentValue> {
        let kind = node.property_str("type").unwrap_or("word");
        if kind == "greedy" {
            let raw = reader.read_until_line_end();
            if raw.is_empty() {
                return Err(Failure);
            }
            return Ok(ArgumentValue::String(raw.to_string()));
        }
        if kind == "quotable" && reader.peek() == Some('"') {
            return quoted(reader, ctx);
        }
        let raw = reader.read_unquoted();
        if raw.is_empty() {
            return Err(Failure);
        }
        Ok(ArgumentValue::String(raw.to_string()))
    }
}

/// `pack:rich_text`: a JSON value checked against the rich text
/// shape. The JSON tree rides along in the argument value.
#[derive(Clone, Copy, Debug, Default)]
pub struct RichTextParser;

impl ArgumentParser for RichTextParser {
    fn parse(
        &self,
        _node: &TreeNode,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<ArgumentValue> {
        let starts_value = reader
            .peek()
            .is_some_and(|c| matches!(c, '{' | '[' | '"' | '-' | 't' | 'f' | 'n') || c.is_ascii_digit());
        if !starts_value {
            return Err(Failure);
        }
        let mut node = parse_value(reader, ctx);
        let checker = rich_text();
        checker(&mut node, ctx);
        Ok(ArgumentValue::Json(node))
    }
}

fn scan_decimal<'src>(reader: &mut Reader<'src>) -> &'src str {
    reader.read_while(|c| c.is_ascii_digit() || matches!(c, '-' | '.'))
}

fn report_invalid_number(raw: &str, range: Range, ctx: &mut Context) {
    let raw = quote(raw);
    let message = ctx.localize("argument.invalid-number", &[&raw]);
    ctx.err.error(message, range);
}

fn check_bounds(node: &TreeNode, value: f64, range: Range, ctx: &mut Context) {
    if let Some(min) = node.property_f64("min") {
        if value < min {
            let message = ctx.localize("argument.number-too-low", &[&min, &value]);
            ctx.err.error(message, range);
        }
    }
    if let Some(max) = node.property_f64("max") {
        if value > max {
            let message = ctx.localize("argument.number-too-high", &[&max, &value]);
            ctx.err.error(message, range);
        }
    }
}

/// Reads a double-quoted string. Only `\"` and `\\` escapes exist at
/// the command level; anything else is reported in place.
fn quoted(reader: &mut Reader<'_>, ctx: &mut Context) -> ParseResult<ArgumentValue> {
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
            match reader.peek() {
                Some(escaped @ ('"' | '\\')) => {
                    value.push(escaped);
                    reader.advance();
                }
                _ => {
                    reader.advance();
                    let range = Range::new(escape_start, reader.offset());
                    let raw = quote(range.text(reader.source()));
                    let message = ctx.localize("argument.invalid-escape", &[&raw]);
                    ctx.err.error(message, range);
                }
            }
            continue;
        }
        value.push(c);
        reader.advance();
    }
    if !closed {
        let message = ctx.localize("argument.unclosed-string", &[]);
        ctx.err.error(message, Range::new(start, reader.offset()));
    }
    Ok(ArgumentValue::String(value))
}
