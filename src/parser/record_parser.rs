//! Individual data line decoding for SURFRAD files
//!
//! Each data line is a fixed-position token sequence: seven timestamp
//! components, then measurements at even positions interleaved with
//! quality-control flags at odd positions. The flags are skipped; the
//! measurement mapping follows the published SURFRAD column order.

use chrono::{TimeZone, Utc};

use super::field_parsers::{component_i32, lenient_f64, measurement};
use super::normalize::scrub_missing_values;
use crate::constants::{COMPLETE_RECORD_FIELDS, TIMESTAMP_FIELDS, positions};
use crate::models::DataRecord;
use crate::{Error, Result};

/// Decode one whitespace-split data line into a record.
///
/// Fails outright only when the timestamp cannot be reconstructed. A line with
/// fewer than the full complement of tokens still decodes, with trailing
/// measurements zero-filled, and returns a non-fatal
/// [`Error::IncompleteRecord`] warning alongside the record; callers decide
/// whether to keep such entries.
pub fn parse_data_line(fields: &[&str]) -> Result<(DataRecord, Option<Error>)> {
    let mut record = DataRecord::default();

    parse_timestamp(fields, &mut record)?;

    record.solar_zenith_angle = measurement(fields, positions::SOLAR_ZENITH_ANGLE);
    record.downwelling_solar = measurement(fields, positions::DOWNWELLING_SOLAR);
    record.upwelling_solar = measurement(fields, positions::UPWELLING_SOLAR);
    record.direct_normal_solar = measurement(fields, positions::DIRECT_NORMAL_SOLAR);
    record.downwelling_diffuse_solar = measurement(fields, positions::DOWNWELLING_DIFFUSE_SOLAR);
    record.downwelling_ir = measurement(fields, positions::DOWNWELLING_IR);
    record.downwelling_ir_case_temp = measurement(fields, positions::DOWNWELLING_IR_CASE_TEMP);
    record.downwelling_ir_dome_temp = measurement(fields, positions::DOWNWELLING_IR_DOME_TEMP);
    record.upwelling_ir = measurement(fields, positions::UPWELLING_IR);
    record.upwelling_ir_case_temp = measurement(fields, positions::UPWELLING_IR_CASE_TEMP);
    record.upwelling_ir_dome_temp = measurement(fields, positions::UPWELLING_IR_DOME_TEMP);
    record.global_uvb = measurement(fields, positions::GLOBAL_UVB);
    record.photosynthetically_active_radiation = measurement(fields, positions::PAR);
    record.net_solar = measurement(fields, positions::NET_SOLAR);
    record.net_ir = measurement(fields, positions::NET_IR);
    record.total_net_radiation = measurement(fields, positions::TOTAL_NET_RADIATION);
    record.temperature_c = measurement(fields, positions::TEMPERATURE);
    record.relative_humidity = measurement(fields, positions::RELATIVE_HUMIDITY);
    record.wind_speed_m_s = measurement(fields, positions::WIND_SPEED);
    record.wind_direction_degrees = measurement(fields, positions::WIND_DIRECTION);
    record.barometric_pressure = measurement(fields, positions::BAROMETRIC_PRESSURE);

    let warning = if fields.len() < COMPLETE_RECORD_FIELDS {
        Some(Error::IncompleteRecord {
            fields: fields.iter().map(|s| s.to_string()).collect(),
        })
    } else {
        None
    };

    scrub_missing_values(&mut record);

    Ok((record, warning))
}

/// Reconstruct the raw and derived timestamps from the leading tokens.
///
/// The derived timestamp is built from year/month/day/hour/minute only; the
/// Julian day and the decimal hour-minute field are stored raw and never
/// cross-validated against the integer components.
fn parse_timestamp(fields: &[&str], record: &mut DataRecord) -> Result<()> {
    if fields.len() < TIMESTAMP_FIELDS {
        return Err(Error::TimestampIncomplete {
            fields: fields.iter().map(|s| s.to_string()).collect(),
        });
    }

    let raw = &mut record.raw_timestamp;
    raw.year = component_i32(fields[0], "year")?;
    raw.jday = component_i32(fields[1], "julian day")?;
    raw.month = component_i32(fields[2], "month")?;
    raw.day = component_i32(fields[3], "day")?;
    raw.hour = component_i32(fields[4], "hour")?;
    raw.minute = component_i32(fields[5], "minute")?;
    raw.decimal = lenient_f64(fields[6]);

    let components = (
        u32::try_from(raw.month).ok(),
        u32::try_from(raw.day).ok(),
        u32::try_from(raw.hour).ok(),
        u32::try_from(raw.minute).ok(),
    );
    let timestamp = match components {
        (Some(month), Some(day), Some(hour), Some(minute)) => Utc
            .with_ymd_and_hms(raw.year, month, day, hour, minute, 0)
            .single(),
        _ => None,
    };

    record.timestamp = Some(timestamp.ok_or(Error::InvalidTimestamp {
        year: raw.year,
        month: raw.month,
        day: raw.day,
        hour: raw.hour,
        minute: raw.minute,
    })?);

    Ok(())
}
