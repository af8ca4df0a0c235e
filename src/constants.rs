//! Format constants for SURFRAD data files.
//!
//! Field counts and token positions follow the published SURFRAD README
//! layout: two header lines, then one record per line with seven timestamp
//! components followed by measurement/quality-flag pairs.

// =============================================================================
// Missing Value Sentinels
// =============================================================================

/// Missing-value marker for floating-point measurements.
pub const MISSING_VALUE: f64 = -9999.9;

/// Missing-value marker for integer fields.
pub const MISSING_VALUE_INT: i32 = -9999;

// =============================================================================
// Header Layout
// =============================================================================

/// Minimum header fields needed to populate a location (lat, lon, elevation).
/// Below this the parse aborts.
pub const MIN_HEADER_FIELDS: usize = 3;

/// Header field count at which the format version becomes available.
pub const HEADER_FIELDS_WITH_VERSION: usize = 6;

/// Position of the format version in the header. Fields 3 and 4 between
/// elevation and version are read by position but never interpreted; their
/// meaning is undocumented in the source format.
pub const HEADER_VERSION_POSITION: usize = 5;

// =============================================================================
// Record Layout
// =============================================================================

/// Number of leading tokens holding timestamp components.
pub const TIMESTAMP_FIELDS: usize = 7;

/// Minimum token count for a line to be worth decoding at all.
pub const MIN_RECORD_FIELDS: usize = 29;

/// Token count of a complete record. Anything between [`MIN_RECORD_FIELDS`]
/// and this decodes with zero-filled trailing measurements plus a warning.
pub const COMPLETE_RECORD_FIELDS: usize = 47;

/// Defensive cap on tokens read per line; the format never defines positions
/// past the barometric pressure quality flag.
pub const MAX_RECORD_FIELDS: usize = 48;

/// Token positions of the measurement fields.
///
/// Each measurement except the solar zenith angle is followed by an integer
/// quality-control flag at the next odd position (9, 11, ... 47). The flags
/// are published alongside the data but are out of scope here and skipped.
pub mod positions {
    pub const SOLAR_ZENITH_ANGLE: usize = 7;
    pub const DOWNWELLING_SOLAR: usize = 8;
    pub const UPWELLING_SOLAR: usize = 10;
    pub const DIRECT_NORMAL_SOLAR: usize = 12;
    pub const DOWNWELLING_DIFFUSE_SOLAR: usize = 14;
    pub const DOWNWELLING_IR: usize = 16;
    pub const DOWNWELLING_IR_CASE_TEMP: usize = 18;
    pub const DOWNWELLING_IR_DOME_TEMP: usize = 20;
    pub const UPWELLING_IR: usize = 22;
    pub const UPWELLING_IR_CASE_TEMP: usize = 24;
    pub const UPWELLING_IR_DOME_TEMP: usize = 26;
    pub const GLOBAL_UVB: usize = 28;
    pub const PAR: usize = 30;
    pub const NET_SOLAR: usize = 32;
    pub const NET_IR: usize = 34;
    pub const TOTAL_NET_RADIATION: usize = 36;
    pub const TEMPERATURE: usize = 38;
    pub const RELATIVE_HUMIDITY: usize = 40;
    pub const WIND_SPEED: usize = 42;
    pub const WIND_DIRECTION: usize = 44;
    pub const BAROMETRIC_PRESSURE: usize = 46;
}
