//! Record decoder for SATCAT lines
//!
//! Extracts every field named by the layout table from a raw record line
//! and converts it to its semantic type. Decoding is pure and repeatable:
//! the same line always produces the same record, and the input is never
//! mutated.

use super::field_parsers::{parse_date, parse_fixed_point, parse_raw_string, parse_uint};
use super::layout::{self, FieldSpec, RECORD_WIDTH};
use crate::app::models::{SatCat, ScDate};
use crate::constants::{DECIMAL_POINT, FIELD_PAD, MULTIPLE_NAMES_MARKER, PAYLOAD_MARKER};
use crate::{Error, Result};

/// Decode a single fixed-width catalogue line into a [`SatCat`] record
///
/// The line must be at least [`RECORD_WIDTH`] bytes; shorter input fails
/// with [`Error::OutOfBounds`] before any field is read. Content beyond the
/// length check is decoded best-effort: spans that violate their declared
/// character class decode to the same values the legacy tooling produced
/// (0 for numeric garbage) rather than failing. Run
/// [`validate`](super::validator::validate) first when strict rejection of
/// malformed lines is wanted.
pub fn decode(line: &[u8]) -> Result<SatCat> {
    if line.len() < RECORD_WIDTH {
        return Err(Error::out_of_bounds(RECORD_WIDTH, line.len()));
    }

    // Decay date is governed by its marker column: a blank marker decodes to
    // the zero sentinel and the remaining span bytes are never interpreted.
    let decay_date = if line[layout::DECAY_DATE.offset] == FIELD_PAD {
        ScDate::unknown()
    } else {
        parse_date(span(line, &layout::DECAY_DATE))
    };

    // Radar cross-section is present only when its decimal-point column
    // holds a literal '.'; otherwise the value is exactly 0.0.
    let rcs_marker = layout::RADAR_CROSS_SECTION.offset + layout::RCS_DECIMAL_OFFSET;
    let radar_cross_section = if line[rcs_marker] == DECIMAL_POINT {
        parse_fixed_point(
            span(line, &layout::RADAR_CROSS_SECTION),
            layout::RCS_DECIMAL_OFFSET,
        )
    } else {
        0.0
    };

    Ok(SatCat {
        intl_designator: parse_raw_string(span(line, &layout::INTL_DESIGNATOR)),
        catalog_number: parse_uint(span(line, &layout::CATALOG_NUMBER)),
        multiple_names: line[layout::MULTIPLE_NAMES.offset] == MULTIPLE_NAMES_MARKER,
        payload: line[layout::PAYLOAD.offset] == PAYLOAD_MARKER,
        operational_status: line[layout::OPERATIONAL_STATUS.offset] as char,
        name: parse_raw_string(span(line, &layout::NAME)),
        source: parse_raw_string(span(line, &layout::SOURCE)),
        launch_date: parse_date(span(line, &layout::LAUNCH_DATE)),
        launch_site: parse_raw_string(span(line, &layout::LAUNCH_SITE)),
        decay_date,
        period_min: parse_fixed_point(span(line, &layout::PERIOD), layout::PERIOD_DECIMAL_OFFSET),
        inclination_deg: parse_fixed_point(
            span(line, &layout::INCLINATION),
            layout::INCLINATION_DECIMAL_OFFSET,
        ),
        apogee_km: parse_uint(span(line, &layout::APOGEE)),
        perigee_km: parse_uint(span(line, &layout::PERIGEE)),
        radar_cross_section,
        status_code: parse_raw_string(span(line, &layout::STATUS_CODE)),
    })
}

/// Slice a field's byte span out of a length-checked line
fn span<'a>(line: &'a [u8], field: &FieldSpec) -> &'a [u8] {
    &line[field.offset..field.end()]
}
