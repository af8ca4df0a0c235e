//! SURFRAD Parser Library
//!
//! A Rust library for parsing NOAA SURFRAD (Surface Radiation Budget Network)
//! station data files into typed records.
//!
//! This library provides tools for:
//! - Parsing the two-line SURFRAD header (station identity and location)
//! - Decoding whitespace-delimited data lines into typed measurement records
//! - Normalizing the network's `-9999.9` missing-value sentinels to zero
//! - Accumulating per-line failures without aborting the whole parse
//!
//! ## Usage
//!
//! ```rust
//! use surfrad_parser::read_data;
//!
//! let input = "\
//! Desert Rock
//!    36.624 -116.019 1007 m version 1
//! ";
//! let result = read_data(input.as_bytes());
//!
//! println!(
//!     "{}: {} entries, {} errors",
//!     result.station.name,
//!     result.station.len(),
//!     result.stats.errors.len()
//! );
//! ```

pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod registry;

// Re-export commonly used types
pub use error::{Error, Result};
pub use models::{DataRecord, Location, RawEntryTime, Station, StationName};
pub use parser::{ParseResult, ParseStats, read_data};
