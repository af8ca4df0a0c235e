//! Core data structures for SURFRAD station files.
//!
//! A [`Station`] owns the header metadata and every decoded [`DataRecord`] in
//! file order. Records keep the literal timestamp components in
//! [`RawEntryTime`] alongside the derived UTC timestamp for traceability.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry;

/// Station name as read from the first header line.
///
/// Kept as free text so that a file naming an unknown station can still be
/// parsed against the unvalidated name; validity is checked against the
/// network registry separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationName(pub String);

impl StationName {
    /// Whether this is one of the seven canonical SURFRAD station names.
    pub fn is_valid(&self) -> bool {
        registry::is_valid_name(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Station coordinates from the second header line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,

    /// Elevation above sea level in meters.
    pub elevation: i32,
}

/// A parsed SURFRAD station file: header metadata plus decoded entries.
///
/// Entries appear in file order, which is not necessarily chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: StationName,

    #[serde(rename = "located_at")]
    pub location: Location,

    /// Format version from the header, when present.
    pub version: i32,

    pub entries: Vec<DataRecord>,
}

impl Station {
    /// Number of decoded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Timestamp components exactly as they appear in the file.
///
/// `decimal` encodes hour.decimalminutes (23.5 = 2330). The Julian day and the
/// decimal field are retained here for debugging but never participate in the
/// derived calendar timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntryTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,

    /// Julian day of year (1-366).
    pub jday: i32,

    pub hour: i32,
    pub minute: i32,

    #[serde(rename = "decimal_time")]
    pub decimal: f64,
}

/// One decoded observation record.
///
/// Measurement fields holding the format's `-9999.9` missing-value sentinel
/// are normalized to zero before the record is returned, so a zero reading and
/// a missing one are indistinguishable downstream. Radiative fluxes are in
/// W/m^2 (UVB in mW/m^2), case/dome temperatures in Kelvin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    #[serde(rename = "raw_time_data")]
    pub raw_timestamp: RawEntryTime,

    /// Derived UTC timestamp with seconds zeroed; `None` means absent.
    pub timestamp: Option<DateTime<Utc>>,

    // Solar radiation
    pub solar_zenith_angle: f64,
    pub downwelling_solar: f64,
    pub upwelling_solar: f64,
    pub direct_normal_solar: f64,
    pub downwelling_diffuse_solar: f64,
    pub downwelling_ir: f64,
    pub downwelling_ir_case_temp: f64,
    pub downwelling_ir_dome_temp: f64,
    pub upwelling_ir: f64,
    pub upwelling_ir_case_temp: f64,
    pub upwelling_ir_dome_temp: f64,
    pub global_uvb: f64,
    pub photosynthetically_active_radiation: f64,
    pub net_solar: f64,
    pub net_ir: f64,
    #[serde(rename = "total_net")]
    pub total_net_radiation: f64,

    // Meteorological
    #[serde(rename = "temperature")]
    pub temperature_c: f64,
    pub relative_humidity: f64,
    #[serde(rename = "wind_speed")]
    pub wind_speed_m_s: f64,
    #[serde(rename = "wind_direction")]
    pub wind_direction_degrees: f64,
    pub barometric_pressure: f64,
}
