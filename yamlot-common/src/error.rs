use crate::Marker;
use thiserror::Error;

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;

#[derive(Debug, Error)]
pub enum YamlError {
    /// The underlying source failed with something other than end of input.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is not valid UTF-8 at byte {pos}")]
    InvalidUtf8 { pos: usize },
    /// A line was dedented to a width that matches no open indentation level.
    #[error("{mark}: indentation {width} does not match any enclosing level (nearest levels are {lower} and {upper})")]
    InvalidDedent {
        mark: Marker,
        width: u32,
        lower: u32,
        upper: u32,
    },
    #[error("unread called without a preceding read")]
    UnreadWithoutRead,
    #[error("unread called while a peeked character is pending")]
    UnreadOverPeek,
    #[error("attempted to pop the base indentation level")]
    PopBaseIndent,
    #[error("indentation width {width} is not deeper than current level {top}")]
    IndentNotIncreasing { top: u32, width: u32 },
    #[error("token queue is empty")]
    EmptyTokenQueue,
}

impl YamlError {
    /// Whether the error comes from the input source rather than from the scanner itself.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, YamlError::Io(_) | YamlError::InvalidUtf8 { .. })
    }
}
