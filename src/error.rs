//! Error handling for SURFRAD parsing operations.
//!
//! Per-line and per-field failures are accumulated by the stream reader rather
//! than propagated, so most variants describe a single salvageable defect. Only
//! [`Error::HeaderTooShort`] aborts a parse.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The underlying stream failed mid-read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header line 1 named a station outside the SURFRAD network.
    #[error("invalid or unknown station name: {name}")]
    UnknownStation { name: String },

    /// Header line 2 carried too few fields to extract a location. Structural:
    /// the parse stops with an empty entry list.
    #[error("header too short to extract location: {fields:?}")]
    HeaderTooShort { fields: Vec<String> },

    /// A single numeric subfield failed to convert.
    #[error("error parsing {field}: invalid value '{value}' ({reason})")]
    FieldParse {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A data line carried too few tokens to attempt decoding. The line number
    /// counts data lines from 1, excluding the two header lines.
    #[error("incomplete record on line {line}: found {found} fields")]
    LineTooShort { line: usize, found: usize },

    /// A data line ended before the seven timestamp components.
    #[error("incomplete timestamp: {fields:?}")]
    TimestampIncomplete { fields: Vec<String> },

    /// Timestamp components parsed but name no valid UTC calendar instant.
    #[error("invalid calendar timestamp: {year}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidTimestamp {
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
    },

    /// A data line decoded but carried fewer than the full complement of
    /// fields; trailing measurements were zero-filled. Non-fatal: the entry is
    /// still returned alongside this warning.
    #[error("incomplete record: {fields:?}")]
    IncompleteRecord { fields: Vec<String> },
}

impl Error {
    /// Create a field parse error with context
    pub fn field_parse(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldParse {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
