use thiserror::Error;

/// A parse error from the gradient grammar.
///
/// Every variant carries the byte offset into the source string where the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unknown unit {unit:?} at offset {offset}")]
    UnknownUnit { unit: String, offset: usize },

    #[error("hex color must have 3, 4, 6 or 8 digits, got {digits} at offset {offset}")]
    InvalidHex { digits: usize, offset: usize },

    #[error("expected {expected} at offset {offset}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("unsupported gradient function {name:?} at offset {offset}")]
    UnsupportedKind { name: String, offset: usize },

    #[error("{function}() takes {expected} channels, got {got} at offset {offset}")]
    ChannelCount {
        function: &'static str,
        expected: usize,
        got: usize,
        offset: usize,
    },

    #[error("gradient has no color stops at offset {offset}")]
    NoColorStops { offset: usize },
}

impl ParseError {
    /// Byte offset into the source where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::UnknownUnit { offset, .. }
            | ParseError::InvalidHex { offset, .. }
            | ParseError::Expected { offset, .. }
            | ParseError::UnsupportedKind { offset, .. }
            | ParseError::ChannelCount { offset, .. }
            | ParseError::NoColorStops { offset } => *offset,
        }
    }
}
