//! Tests for single-line record decoding

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use super::{MISSING_LINE, VALID_LINE, split};
use crate::Error;
use crate::models::{DataRecord, RawEntryTime};
use crate::parser::parse_data_line;

#[test]
fn test_decodes_complete_line() {
    let (record, warning) = parse_data_line(&split(VALID_LINE)).unwrap();

    assert!(warning.is_none());

    let expected = DataRecord {
        raw_timestamp: RawEntryTime {
            year: 2024,
            month: 2,
            day: 17,
            jday: 48,
            hour: 23,
            minute: 59,
            decimal: 23.983,
        },
        timestamp: Some(Utc.with_ymd_and_hms(2024, 2, 17, 23, 59, 0).unwrap()),
        solar_zenith_angle: 74.37,
        downwelling_solar: 136.8,
        upwelling_solar: 28.3,
        direct_normal_solar: 49.4,
        downwelling_diffuse_solar: 126.7,
        downwelling_ir: 320.1,
        downwelling_ir_case_temp: 289.68,
        downwelling_ir_dome_temp: 289.43,
        upwelling_ir: 396.8,
        upwelling_ir_case_temp: 288.55,
        upwelling_ir_dome_temp: 288.61,
        global_uvb: 9.8,
        photosynthetically_active_radiation: 62.0,
        net_solar: 111.7,
        net_ir: -76.7,
        total_net_radiation: 35.0,
        temperature_c: 15.1,
        relative_humidity: 29.0,
        wind_speed_m_s: 5.1,
        wind_direction_degrees: 106.8,
        barometric_pressure: 903.6,
    };

    assert_eq!(record, expected);
}

#[test]
fn test_sentinel_measurements_normalize_to_zero() {
    let (record, warning) = parse_data_line(&split(MISSING_LINE)).unwrap();

    assert!(warning.is_none());
    assert_eq!(
        record.timestamp,
        Some(Utc.with_ymd_and_hms(1995, 1, 1, 0, 0, 0).unwrap())
    );

    let expected = DataRecord {
        raw_timestamp: RawEntryTime {
            year: 1995,
            month: 1,
            day: 1,
            jday: 1,
            hour: 0,
            minute: 0,
            decimal: 0.0,
        },
        timestamp: record.timestamp,
        ..Default::default()
    };
    assert_eq!(record, expected);
}

#[test]
fn test_too_few_tokens_for_timestamp() {
    let result = parse_data_line(&split("2024 48 2 17 23 59"));
    assert!(matches!(result, Err(Error::TimestampIncomplete { .. })));
}

#[test]
fn test_short_line_decodes_with_warning() {
    // Eight tokens: a full timestamp plus the solar zenith angle.
    let (record, warning) = parse_data_line(&split("1995 1 1 1 0 0 0.0 42.5")).unwrap();

    assert!(matches!(warning, Some(Error::IncompleteRecord { .. })));
    assert_eq!(record.solar_zenith_angle, 42.5);
    // Everything past the end of the line reads as zero.
    assert_eq!(record.downwelling_solar, 0.0);
    assert_eq!(record.barometric_pressure, 0.0);
}

#[test]
fn test_malformed_measurement_degrades_to_zero() {
    let mut fields = split(VALID_LINE);
    // Downwelling solar at position 8.
    fields[8] = "not-a-number";

    let (record, warning) = parse_data_line(&fields).unwrap();

    assert!(warning.is_none());
    assert_eq!(record.downwelling_solar, 0.0);
    assert_eq!(record.solar_zenith_angle, 74.37);
}

#[test]
fn test_malformed_timestamp_component_fails_line() {
    let mut fields = split(VALID_LINE);
    fields[0] = "not-a-year";

    let result = parse_data_line(&fields);
    assert!(matches!(
        result,
        Err(Error::FieldParse { field: "year", .. })
    ));
}

#[test]
fn test_calendar_invalid_date_fails_line() {
    let mut fields = split(VALID_LINE);
    fields[2] = "13"; // month

    let result = parse_data_line(&fields);
    assert!(matches!(result, Err(Error::InvalidTimestamp { .. })));
}

#[test]
fn test_quality_flags_are_ignored() {
    let mut fields = split(VALID_LINE);
    // Corrupting a QC flag position must not disturb its measurement.
    fields[9] = "garbage";

    let (record, _) = parse_data_line(&fields).unwrap();
    assert_eq!(record.downwelling_solar, 136.8);
}
