//! Parse result and statistics structures for SURFRAD processing
//!
//! A parse never fails as a whole for malformed data lines; it returns the
//! station with every salvageable entry plus the accumulated error list.
//! Callers distinguish an aborted parse (empty entries with errors) from a
//! degraded one (entries present alongside warnings).

use crate::Error;
use crate::models::Station;

/// Result of parsing one SURFRAD stream.
#[derive(Debug)]
pub struct ParseResult {
    /// Station with whatever entries were successfully decoded.
    pub station: Station,

    /// Accounting and accumulated per-line errors.
    pub stats: ParseStats,
}

impl ParseResult {
    /// Whether any error was accumulated during the parse. Some data may be
    /// missing or wrong; the entries that are present decoded cleanly.
    pub fn has_errors(&self) -> bool {
        !self.stats.errors.is_empty()
    }
}

/// Parsing statistics accumulated over the data lines of a stream.
#[derive(Debug, Default)]
pub struct ParseStats {
    /// Total number of data lines encountered.
    pub total_lines: usize,

    /// Number of entries successfully decoded and kept.
    pub entries_parsed: usize,

    /// Number of lines skipped due to errors.
    pub lines_skipped: usize,

    /// Every error accumulated during the parse, header errors included.
    pub errors: Vec<Error>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of data lines that produced an entry, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.entries_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }
}
