//! Dotted value formatter
//!
//! Renders integers, strings, containers and tuples in dotted "IP address"
//! notation.
//!
//! # Architecture
//!
//! Formatting is two steps:
//!
//! 1. **Lower**: [`AsIpValue`] turns a typed input into a [`Value`]. The impl a
//!    type has decides its [`Shape`], so dispatch is resolved at compile time.
//! 2. **Render**: [`write_value`] matches on the `Value` and writes components
//!    joined by the configured separator into an [`Emitter`].
//!
//! ```
//! use ipfmt::format_ip;
//!
//! assert_eq!(format_ip(&-1i8).as_deref(), Ok("255"));
//! assert_eq!(format_ip(&2_130_706_433i32).as_deref(), Ok("127.0.0.1"));
//! assert_eq!(format_ip("Hello, World!").as_deref(), Ok("Hello, World!"));
//! assert_eq!(format_ip(&vec![100, 200, 300, 400]).as_deref(), Ok("100.200.300.400"));
//! assert_eq!(format_ip(&(123, 456, 789, 0)).as_deref(), Ok("123.456.789.0"));
//! assert!(format_ip(&Vec::<i32>::new()).is_err());
//! ```
//!
//! # Modules
//!
//! - [`value`]: Shapes, the `Value` sum type and the `AsIpValue` impls
//! - [`octets`]: Integer to big-endian byte groups
//! - [`render`]: The renderer
//! - [`emitter`]: Output abstraction for string and writer output
//! - [`config`]: Formatter configuration
//! - [`error`]: Error types

pub mod config;
pub mod emitter;
pub mod error;
pub mod octets;
pub mod render;
pub mod value;

use std::io;

pub use config::{FormatConfig, DEFAULT_SEPARATOR};
pub use emitter::{Emitter, StringEmitter, WriterEmitter};
pub use error::{FormatError, PrintError};
pub use octets::{OctetIter, Octets, Width};
pub use render::{format_value, write_value};
pub use value::{AsIpValue, Component, Shape, Value};

/// Format `value` in dotted notation with the default configuration.
///
/// # Errors
///
/// Returns [`FormatError::EmptyInput`] for an empty sequence.
pub fn format_ip<T: AsIpValue + ?Sized>(value: &T) -> Result<String, FormatError> {
    format_ip_with(value, &FormatConfig::default())
}

/// Format `value` in dotted notation with an explicit configuration.
///
/// # Errors
///
/// Returns [`FormatError::EmptyInput`] for an empty sequence.
pub fn format_ip_with<T: AsIpValue + ?Sized>(
    value: &T,
    config: &FormatConfig,
) -> Result<String, FormatError> {
    format_value(&value.as_ip_value(), config)
}

/// Write `value` in dotted notation to `writer`, followed by a newline.
///
/// Nothing is written when the value is rejected.
///
/// # Errors
///
/// Returns [`PrintError::Format`] if the value is rejected and
/// [`PrintError::Io`] if the writer fails.
pub fn print_ip<T, W>(value: &T, writer: W) -> Result<(), PrintError>
where
    T: AsIpValue + ?Sized,
    W: io::Write,
{
    let mut emitter = WriterEmitter::new(writer);
    write_value(&value.as_ip_value(), &FormatConfig::default(), &mut emitter)?;
    emitter.emit_newline();
    emitter.finish()?;
    Ok(())
}
