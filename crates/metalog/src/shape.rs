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

//! Call shapes: the four ways a log call can be made.
//!
//! | Call                               | Shape                                 |
//! |------------------------------------|---------------------------------------|
//! | `info!(log)`                       | [`CallShape::Empty`]                  |
//! | `info!(log, value)`                | [`CallShape::Bare`]                   |
//! | `info!(log, "Ctx", value)`         | [`CallShape::Captioned`]              |
//! | `info!(log, "Ctx", "n=%d", 5, ..)` | [`CallShape::CaptionedFormatted`]     |

use crate::format::{format, inspect, number_to_string};
use serde::Serialize;
use serde_json::Value;

/// Arguments of a single log call
#[derive(Debug, Clone, PartialEq)]
pub enum CallShape {
    /// No arguments
    Empty,
    /// One value
    Bare(Value),
    /// A caption and one value
    Captioned(String, Value),
    /// A caption, a format template and its arguments
    CaptionedFormatted(String, Value, Vec<Value>),
}

/// Message and optional caption extracted from a call shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedMessage {
    /// Caption, if the call had one
    pub caption: Option<String>,
    /// Message as it goes into the record
    pub message: Value,
}

impl CallShape {
    /// Shape of a `(caption, template, args...)` call
    pub fn formatted(
        caption: impl Into<String>,
        template: impl Into<Value>,
        args: Vec<Value>,
    ) -> Self {
        CallShape::CaptionedFormatted(caption.into(), template.into(), args)
    }

    /// Turn the call into a message.
    ///
    /// A single structured value or string passes through untouched; a single
    /// scalar is inspected. A captioned value is always inspected, even when
    /// it is a string.
    pub fn into_message(self) -> ShapedMessage {
        match self {
            CallShape::Empty => ShapedMessage {
                caption: None,
                message: Value::String(String::new()),
            },
            CallShape::Bare(value) => {
                let message = match value {
                    Value::Object(_) | Value::Array(_) | Value::Null | Value::String(_) => value,
                    scalar => Value::String(inspect(&scalar)),
                };
                ShapedMessage {
                    caption: None,
                    message,
                }
            }
            CallShape::Captioned(caption, value) => ShapedMessage {
                caption: Some(caption),
                message: Value::String(inspect(&value)),
            },
            CallShape::CaptionedFormatted(caption, template, args) => ShapedMessage {
                caption: Some(caption),
                message: Value::String(format(&template, &args)),
            },
        }
    }
}

/// Convert any serializable argument into a log value.
///
/// Values that fail to serialize (maps with non-string keys, for instance)
/// are logged as a description of the failure instead of aborting the call.
pub fn to_value<T: Serialize + ?Sized>(arg: &T) -> Value {
    serde_json::to_value(arg).unwrap_or_else(|e| Value::String(format!("<unserializable: {}>", e)))
}

/// Convert a caption expression into caption text.
///
/// Falsy captions (`false`, `0`, `null`, `""`) become the empty string, which
/// the record omits. Strings are kept as written and other values use their
/// JSON text.
pub fn caption_text<T: Serialize + ?Sized>(caption: &T) -> String {
    match to_value(caption) {
        Value::String(s) => s,
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => number_to_string(&n),
        other => other.to_string(),
    }
}

impl From<()> for CallShape {
    fn from(_: ()) -> Self {
        CallShape::Empty
    }
}

impl From<&str> for CallShape {
    fn from(message: &str) -> Self {
        CallShape::Bare(Value::String(message.to_string()))
    }
}

impl From<String> for CallShape {
    fn from(message: String) -> Self {
        CallShape::Bare(Value::String(message))
    }
}

impl From<Value> for CallShape {
    fn from(value: Value) -> Self {
        CallShape::Bare(value)
    }
}

impl<C: Into<String>, V: Into<Value>> From<(C, V)> for CallShape {
    fn from((caption, value): (C, V)) -> Self {
        CallShape::Captioned(caption.into(), value.into())
    }
}

impl<C: Into<String>, T: Into<Value>> From<(C, T, Vec<Value>)> for CallShape {
    fn from((caption, template, args): (C, T, Vec<Value>)) -> Self {
        CallShape::CaptionedFormatted(caption.into(), template.into(), args)
    }
}
