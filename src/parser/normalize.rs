//! Missing-value sentinel normalization
//!
//! SURFRAD marks an unrecorded measurement with `-9999.9` (floats) and `-9999`
//! (integers). Normalization rewrites every sentinel-valued measurement field
//! to zero, which conflates "missing" with a true zero reading; that ambiguity
//! is the format's own convention and is preserved here. The pass is explicit
//! and field-by-field rather than driven by any runtime introspection, and it
//! is idempotent.

use crate::constants::MISSING_VALUE;
use crate::models::DataRecord;

/// Rewrite sentinel-valued measurement fields of a record to zero.
///
/// The record has no integer-typed measurement fields, so the integer
/// sentinel never applies; the raw timestamp components are kept as read. An
/// absent timestamp is already represented as `None`, so no timestamp
/// collapsing is needed.
pub fn scrub_missing_values(record: &mut DataRecord) {
    for field in [
        &mut record.solar_zenith_angle,
        &mut record.downwelling_solar,
        &mut record.upwelling_solar,
        &mut record.direct_normal_solar,
        &mut record.downwelling_diffuse_solar,
        &mut record.downwelling_ir,
        &mut record.downwelling_ir_case_temp,
        &mut record.downwelling_ir_dome_temp,
        &mut record.upwelling_ir,
        &mut record.upwelling_ir_case_temp,
        &mut record.upwelling_ir_dome_temp,
        &mut record.global_uvb,
        &mut record.photosynthetically_active_radiation,
        &mut record.net_solar,
        &mut record.net_ir,
        &mut record.total_net_radiation,
        &mut record.temperature_c,
        &mut record.relative_humidity,
        &mut record.wind_speed_m_s,
        &mut record.wind_direction_degrees,
        &mut record.barometric_pressure,
    ] {
        if *field == MISSING_VALUE {
            *field = 0.0;
        }
    }
}
