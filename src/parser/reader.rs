//! Stream reader for SURFRAD station files
//!
//! Consumes an already-open text stream: station name on line 1, location
//! header on line 2, one data record per remaining line. Malformed data lines
//! are recorded and skipped rather than aborting the parse; only a header too
//! short to carry a location stops early.

use std::io::BufRead;

use tracing::{debug, warn};

use super::field_parsers::{component_f64, component_i32};
use super::record_parser::parse_data_line;
use super::stats::{ParseResult, ParseStats};
use crate::Error;
use crate::constants::{
    HEADER_FIELDS_WITH_VERSION, HEADER_VERSION_POSITION, MAX_RECORD_FIELDS, MIN_HEADER_FIELDS,
    MIN_RECORD_FIELDS,
};
use crate::models::{Station, StationName};

/// Parse a complete SURFRAD stream into a station and an aggregated error list.
///
/// The returned [`ParseResult`] always carries every entry that decoded
/// cleanly; a non-empty error list means some lines or header fields were
/// dropped or defaulted, not that the whole result is invalid. Only a header
/// with fewer than three fields aborts, returning an empty entry list.
pub fn read_data<R: BufRead>(reader: R) -> ParseResult {
    let mut station = Station::default();
    let mut stats = ParseStats::new();
    let mut lines = reader.lines();

    match lines.next() {
        Some(Ok(line)) => {
            station.name = StationName(line.trim().to_string());
            if !station.name.is_valid() {
                warn!(name = %station.name, "unknown station name");
                stats.errors.push(Error::UnknownStation {
                    name: station.name.as_str().to_string(),
                });
            }
        }
        Some(Err(e)) => {
            stats.errors.push(Error::Io(e));
            return ParseResult { station, stats };
        }
        None => return ParseResult { station, stats },
    }

    match lines.next() {
        Some(Ok(line)) => {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if !parse_header(&fields, &mut station, &mut stats.errors) {
                return ParseResult { station, stats };
            }
        }
        Some(Err(e)) => {
            stats.errors.push(Error::Io(e));
            return ParseResult { station, stats };
        }
        None => return ParseResult { station, stats },
    }

    debug!(
        station = %station.name,
        latitude = station.location.latitude,
        longitude = station.location.longitude,
        elevation = station.location.elevation,
        version = station.version,
        "parsed header"
    );

    let mut line_no = 0;
    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                stats.errors.push(Error::Io(e));
                break;
            }
        };

        line_no += 1;
        stats.total_lines += 1;

        let fields: Vec<&str> = line.split_whitespace().take(MAX_RECORD_FIELDS).collect();
        if fields.len() < MIN_RECORD_FIELDS {
            debug!(line = line_no, found = fields.len(), "line too short, skipping");
            stats.lines_skipped += 1;
            stats.errors.push(Error::LineTooShort {
                line: line_no,
                found: fields.len(),
            });
            continue;
        }

        match parse_data_line(&fields) {
            Ok((record, warning)) => {
                // An incomplete record is still kept; the warning tells the
                // caller which trailing measurements were zero-filled.
                if let Some(warning) = warning {
                    stats.errors.push(warning);
                }
                station.entries.push(record);
                stats.entries_parsed += 1;
            }
            Err(e) => {
                debug!(line = line_no, error = %e, "skipping unparseable record");
                stats.lines_skipped += 1;
                stats.errors.push(e);
            }
        }
    }

    debug!(entries = station.len(), errors = stats.errors.len(), "parse complete");

    ParseResult { station, stats }
}

/// Parse the location header line. Returns false when the header is too short
/// to carry a location, which aborts the parse.
///
/// Fields 3 and 4 between elevation and version are skipped by position; the
/// published format leaves them undocumented. Individual numeric failures are
/// recorded and leave the field at its default.
fn parse_header(fields: &[&str], station: &mut Station, errors: &mut Vec<Error>) -> bool {
    if fields.len() < MIN_HEADER_FIELDS {
        errors.push(Error::HeaderTooShort {
            fields: fields.iter().map(|s| s.to_string()).collect(),
        });
        return false;
    }

    match component_f64(fields[0], "latitude") {
        Ok(value) => station.location.latitude = value,
        Err(e) => errors.push(e),
    }
    match component_f64(fields[1], "longitude") {
        Ok(value) => station.location.longitude = value,
        Err(e) => errors.push(e),
    }
    match component_i32(fields[2], "elevation") {
        Ok(value) => station.location.elevation = value,
        Err(e) => errors.push(e),
    }

    if fields.len() >= HEADER_FIELDS_WITH_VERSION {
        match component_i32(fields[HEADER_VERSION_POSITION], "version") {
            Ok(value) => station.version = value,
            Err(e) => errors.push(e),
        }
    }

    true
}
