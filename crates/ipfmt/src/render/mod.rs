//! Renderer
//!
//! Turns a [`Value`] into dotted text with a single `match` over its shape.
//!
//! # Rules
//!
//! - **Integer**: one decimal component per byte, most significant first.
//! - **Text**: emitted verbatim, separators inside it are not touched.
//! - **Sequence** / **Tuple**: each element's `Display` output, in order.
//!   Elements are not clamped to the byte range.
//!
//! A sequence or tuple with no elements, or one whose element `Display` impl
//! fails, is rejected before anything reaches the emitter, so a failed render
//! never leaves partial output behind.

use std::fmt::{self, Write as _};

use crate::config::FormatConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::error::FormatError;
use crate::octets::Octets;
use crate::value::{Component, Value};


/// Render `value` into a new string.
///
/// # Errors
///
/// Returns [`FormatError::EmptyInput`] for a sequence or tuple without
/// elements and [`FormatError::Display`] when an element's `Display` impl
/// fails.
pub fn format_value(value: &Value<'_>, config: &FormatConfig) -> Result<String, FormatError> {
    let mut emitter = StringEmitter::with_capacity(estimate_len(value));
    write_value(value, config, &mut emitter)?;
    Ok(emitter.output())
}

/// Render `value` into `emitter`.
///
/// Every component is rendered before the first one is emitted, so on error
/// the emitter is untouched.
///
/// # Errors
///
/// Returns [`FormatError::EmptyInput`] for a sequence or tuple without
/// elements and [`FormatError::Display`] when an element's `Display` impl
/// fails.
#[tracing::instrument(level = "trace", skip_all, fields(shape = %value.shape()))]
pub fn write_value<E: Emitter + ?Sized>(
    value: &Value<'_>,
    config: &FormatConfig,
    emitter: &mut E,
) -> Result<(), FormatError> {
    match value {
        Value::Integer(octets) => {
            write_octets(*octets, config, emitter);
            Ok(())
        }
        Value::Text(text) => {
            emitter.emit(text);
            Ok(())
        }
        Value::Sequence(items) | Value::Tuple(items) => {
            if items.is_empty() {
                tracing::debug!(shape = %value.shape(), "rejecting input with no elements");
                return Err(FormatError::empty(value.shape()));
            }
            let rendered = RenderedComponents::render(items).map_err(|fmt::Error| {
                tracing::debug!(shape = %value.shape(), "element Display impl failed");
                FormatError::display(value.shape())
            })?;
            rendered.emit(config, emitter);
            Ok(())
        }
    }
}

fn write_octets<E: Emitter + ?Sized>(octets: Octets, config: &FormatConfig, emitter: &mut E) {
    let mut buf = [0u8; 3];
    for (i, byte) in octets.iter().enumerate() {
        if i > 0 {
            emitter.emit_separator(config);
        }
        emitter.emit(octet_str(byte, &mut buf));
    }
}

/// Decimal digits of `byte`, written into the tail of `buf`.
fn octet_str(mut byte: u8, buf: &mut [u8; 3]) -> &str {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + byte % 10;
        byte /= 10;
        if byte == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or_default()
}

/// Components rendered into one buffer, with the end offset of each.
struct RenderedComponents {
    text: String,
    ends: Vec<usize>,
}

impl RenderedComponents {
    fn render(items: &[Component<'_>]) -> Result<Self, fmt::Error> {
        let mut text = String::with_capacity(items.len() * 4);
        let mut ends = Vec::with_capacity(items.len());
        for item in items {
            write!(text, "{item}")?;
            ends.push(text.len());
        }
        Ok(RenderedComponents { text, ends })
    }

    fn emit<E: Emitter + ?Sized>(&self, config: &FormatConfig, emitter: &mut E) {
        let mut start = 0;
        for (i, &end) in self.ends.iter().enumerate() {
            if i > 0 {
                emitter.emit_separator(config);
            }
            emitter.emit(&self.text[start..end]);
            start = end;
        }
    }
}

/// Rough output size, used to pre-size the string buffer.
fn estimate_len(value: &Value<'_>) -> usize {
    match value {
        Value::Text(text) => text.len(),
        _ => value.component_count() * 4,
    }
}
