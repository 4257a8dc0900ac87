//! Formatter configuration.

/// Separator placed between components by default.
pub const DEFAULT_SEPARATOR: char = '.';

/// Configuration for the formatter.
///
/// The defaults reproduce dotted IP-address notation. Only the separator is
/// configurable; component rendering is fixed per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatConfig {
    /// Character emitted between adjacent components.
    /// Defaults to `.`.
    pub separator: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified separator.
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}
