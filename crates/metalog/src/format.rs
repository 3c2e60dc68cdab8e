// Metalog - Leveled JSON logging façade
// Copyright (C) 2026 Metalog Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Human-readable rendering of log arguments.
//!
//! Two operations shape messages:
//!
//! - [`inspect`] renders any value on a single line, quoting strings and
//!   showing the hidden `length` of arrays, e.g. `{ user: 'ada', ids: [ 1,
//!   2, [length]: 2 ] }`. [`inspect_with`] takes [`InspectOptions`] to hide
//!   that structure or collapse nested values past a depth.
//! - [`format`] performs printf-style substitution (`%s %d %i %f %j %o %O %c
//!   %%`) and appends leftover arguments separated by spaces.

use serde_json::{Map, Number, Value};
use std::fmt::Write as _;

/// How [`inspect_with`] renders structured values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    /// Show the hidden `[length]` entry of arrays
    pub show_hidden: bool,
    /// Nesting levels shown before values collapse to `[Object]`/`[Array]`;
    /// `None` is unbounded
    pub depth: Option<usize>,
}

impl InspectOptions {
    /// Everything, at any depth; used for single inspected arguments
    pub const FULL: InspectOptions = InspectOptions {
        show_hidden: true,
        depth: None,
    };

    /// Plain rendering two levels deep; `%O` and leftover arguments
    pub const DEFAULT: InspectOptions = InspectOptions {
        show_hidden: false,
        depth: Some(2),
    };

    /// Top level only; `%s`
    pub const SHALLOW: InspectOptions = InspectOptions {
        show_hidden: false,
        depth: Some(0),
    };

    /// Hidden structure four levels deep; `%o`
    pub const DETAILED: InspectOptions = InspectOptions {
        show_hidden: true,
        depth: Some(4),
    };
}

/// Render a value for humans with [`InspectOptions::FULL`].
///
/// Output is always a single line, however long; there is no width-based
/// line breaking.
pub fn inspect(value: &Value) -> String {
    inspect_with(value, InspectOptions::FULL)
}

/// Render a value for humans with explicit options
pub fn inspect_with(value: &Value, options: InspectOptions) -> String {
    let mut out = String::new();
    write_value(&mut out, value, options, 0);
    out
}

fn write_value(out: &mut String, value: &Value, options: InspectOptions, level: usize) {
    let collapsed = options.depth.is_some_and(|depth| level > depth);
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&number_to_string(n)),
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) if items.is_empty() && !options.show_hidden => out.push_str("[]"),
        Value::Array(_) if collapsed => out.push_str("[Array]"),
        Value::Array(items) => write_array(out, items, options, level),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(_) if collapsed => out.push_str("[Object]"),
        Value::Object(map) => write_object(out, map, options, level),
    }
}

fn write_array(out: &mut String, items: &[Value], options: InspectOptions, level: usize) {
    out.push_str("[ ");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_value(out, item, options, level + 1);
    }
    if options.show_hidden {
        if !items.is_empty() {
            out.push_str(", ");
        }
        let _ = write!(out, "[length]: {}", items.len());
    }
    out.push_str(" ]");
}

fn write_object(
    out: &mut String,
    map: &Map<String, Value>,
    options: InspectOptions,
    level: usize,
) {
    out.push_str("{ ");
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if is_identifier(key) {
            out.push_str(key);
        } else {
            out.push_str(&quote_with(key, '\''));
        }
        out.push_str(": ");
        write_value(out, value, options, level + 1);
    }
    out.push_str(" }");
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quote a string, preferring single quotes and switching to `"` or a
/// backtick when that avoids escaping.
fn quote(s: &str) -> String {
    let delimiter = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };
    quote_with(s, delimiter)
}

fn quote_with(s: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) < 0x80 => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// Largest integer a double represents exactly
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Render a number the way scripting runtimes do. Integers beyond 2^53 go
/// through `f64`, like every number there.
pub(crate) fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER {
            return i.to_string();
        }
    } else if let Some(u) = n.as_u64() {
        if u <= MAX_SAFE_INTEGER {
            return u.to_string();
        }
    }
    n.as_f64().map_or_else(|| n.to_string(), float_to_string)
}

/// `5` rather than `5.0`, `NaN` and `Infinity` spelled out, and exponent
/// form (`1e+21`, `1.5e-7`) at or above 1e21 and below 1e-6.
fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        // `{:e}` gives the shortest round-trip digits, e.g. `1e21`, `1.5e-7`
        let scientific = format!("{:e}", f);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => scientific,
        };
    }
    format!("{}", f)
}

/// Text a value becomes when coerced to a string
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numeric coercion used by `%d`
fn coerce_to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number_literal(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => parse_number_literal(&coerce_to_string(single)),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Whole-string numeric parse: blank is 0, anything unparsable is NaN
fn parse_number_literal(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Leading-integer parse used by `%i`
fn parse_int_prefix(s: &str) -> Option<i128> {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i128 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Longest-decimal-prefix parse used by `%f`
fn parse_float_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return f64::NAN;
    }
    // Optional exponent, only taken when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// How a `%s` argument renders: strings raw, scalars as text, structured
/// values inspected one level deep
fn render_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => inspect_with(value, InspectOptions::SHALLOW),
        other => coerce_to_string(other),
    }
}

/// How a leftover argument, or any argument of a non-string template,
/// renders: strings raw, everything else inspected
fn render_extra(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => inspect_with(other, InspectOptions::DEFAULT),
    }
}

fn render_directive(directive: char, arg: &Value) -> Option<String> {
    let rendered = match directive {
        's' => render_string(arg),
        'd' => match arg {
            Value::Number(n) if n.is_i64() || n.is_u64() => number_to_string(n),
            other => float_to_string(coerce_to_number(other)),
        },
        'i' => parse_int_prefix(&coerce_to_string(arg))
            .map_or_else(|| "NaN".to_string(), |i| i.to_string()),
        'f' => float_to_string(parse_float_prefix(&coerce_to_string(arg))),
        'j' => serde_json::to_string(arg).unwrap_or_else(|_| "undefined".to_string()),
        'o' => inspect_with(arg, InspectOptions::DETAILED),
        'O' => inspect_with(arg, InspectOptions::DEFAULT),
        'c' => String::new(),
        _ => return None,
    };
    Some(rendered)
}

/// printf-style substitution.
///
/// When `template` is not a string every argument, template included, is
/// rendered and joined with spaces. Placeholders without a matching argument
/// are left as written. A template with no arguments at all is returned
/// untouched, `%%` included.
pub fn format(template: &Value, args: &[Value]) -> String {
    let Value::String(template) = template else {
        return std::iter::once(template)
            .chain(args)
            .map(render_extra)
            .collect::<Vec<_>>()
            .join(" ");
    };
    if args.is_empty() {
        return template.clone();
    }

    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(directive) if "sdifjoOc".contains(directive) => {
                // Consume the directive only when an argument is left for it
                match remaining.as_slice().first() {
                    Some(arg) => {
                        chars.next();
                        remaining.next();
                        if let Some(rendered) = render_directive(directive, arg) {
                            out.push_str(&rendered);
                        }
                    }
                    None => out.push('%'),
                }
            }
            _ => out.push('%'),
        }
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&render_extra(arg));
    }
    out
}
