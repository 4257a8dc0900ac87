//! Formatting errors.
//!
//! Shape mismatches never reach this module: an input with no [`AsIpValue`]
//! impl, or a tuple mixing element types, is rejected by the compiler. What is
//! left are the conditions only visible at runtime.
//!
//! [`AsIpValue`]: crate::AsIpValue

use std::io;

use crate::value::Shape;

/// Error produced while rendering a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// A sequence or tuple had no components to join.
    #[error("cannot format an empty {shape}")]
    EmptyInput {
        /// Shape of the rejected input.
        shape: Shape,
    },

    /// An element's `Display` impl returned an error; nothing was emitted.
    #[error("an element of the {shape} failed to display")]
    Display {
        /// Shape of the rejected input.
        shape: Shape,
    },
}

impl FormatError {
    #[cold]
    pub(crate) fn empty(shape: Shape) -> Self {
        FormatError::EmptyInput { shape }
    }

    #[cold]
    pub(crate) fn display(shape: Shape) -> Self {
        FormatError::Display { shape }
    }
}

/// Error produced while printing a formatted value to a writer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PrintError {
    /// The value could not be formatted; nothing was written.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The writer failed.
    #[error("failed to write formatted value: {0}")]
    Io(#[from] io::Error),
}
