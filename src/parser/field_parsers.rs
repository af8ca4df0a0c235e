//! Field parsing utilities for SURFRAD records
//!
//! Two parsing policies coexist in the format. Header and timestamp fields
//! parse strictly and report a [`Error::FieldParse`] on failure. Measurement
//! fields parse leniently: a malformed number degrades silently to zero rather
//! than rejecting the whole line.

use crate::{Error, Result};

/// Parse a measurement token, degrading to zero on failure.
pub fn lenient_f64(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

/// Read the measurement at a token position, treating a missing or malformed
/// token as zero.
pub fn measurement(fields: &[&str], position: usize) -> f64 {
    fields.get(position).map(|v| lenient_f64(v)).unwrap_or(0.0)
}

/// Parse a required integer field, with the field name carried in the error.
pub fn component_i32(value: &str, field: &'static str) -> Result<i32> {
    value
        .parse()
        .map_err(|e: std::num::ParseIntError| Error::field_parse(field, value, e.to_string()))
}

/// Parse a required float field, with the field name carried in the error.
pub fn component_f64(value: &str, field: &'static str) -> Result<f64> {
    value
        .parse()
        .map_err(|e: std::num::ParseFloatError| Error::field_parse(field, value, e.to_string()))
}
