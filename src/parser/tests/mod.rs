//! Shared fixtures for parser tests
//!
//! The sample lines below follow the published SURFRAD record layout: seven
//! timestamp tokens, then measurements interleaved with quality-control flags.

mod record_parser_tests;

/// A complete 48-token record from Desert Rock, 2024-02-17 23:59 UTC.
pub const VALID_LINE: &str = "2024  48  2 17 23 59 23.983  74.37   136.8 0    28.3 0    49.4 0   126.7 0   320.1 0   289.68 0   289.43 0   396.8 0   288.55 0   288.61 0     9.8 0    62.0 0   111.7 0   -76.7 0    35.0 0    15.1 0    29.0 0     5.1 0   106.8 0   903.6 0";

/// A complete record with every measurement set to the missing-value sentinel.
pub const MISSING_LINE: &str = "1995 1 1 1 0 0 0.0 0.0 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1 -9999.9 1";

/// The real-world header line shape: lat, lon, elevation, then the literal
/// "m version" tokens ahead of the version number.
pub const HEADER_LINE: &str = "   36.624 -116.019 1007 m version 1";

pub fn split(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
