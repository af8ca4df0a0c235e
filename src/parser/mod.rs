//! Parser for SURFRAD station data files
//!
//! SURFRAD files carry a station name line, a location header line, and then
//! one whitespace-delimited record per line. The parser is organized into
//! small components:
//! - [`reader`] - Stream consumption, header extraction, per-line error accumulation
//! - [`record_parser`] - Decoding one data line into a typed record
//! - [`normalize`] - Missing-value sentinel normalization
//! - [`field_parsers`] - Utility functions for lenient and strict field parsing
//! - [`stats`] - Parse result and statistics structures
//!
//! ## Usage
//!
//! ```rust
//! use surfrad_parser::parser::read_data;
//!
//! let file = "\
//! Desert Rock
//!    36.624 -116.019 1007 m version 1
//! ";
//! let result = read_data(file.as_bytes());
//! assert!(result.station.name.is_valid());
//! ```

pub mod field_parsers;
pub mod normalize;
pub mod reader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-export main entry points for easy access
pub use normalize::scrub_missing_values;
pub use reader::read_data;
pub use record_parser::parse_data_line;
pub use stats::{ParseResult, ParseStats};
