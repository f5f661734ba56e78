//! Tests for line-to-record decoding

use super::{on_orbit_line, place, sputnik_line};
use crate::Error;
use crate::app::models::ScDate;
use crate::app::services::fixed_width::decoder::decode;
use crate::app::services::fixed_width::layout::{self, RECORD_WIDTH};

#[test]
fn test_decode_captured_valid_line() {
    let record = decode(&sputnik_line()).unwrap();

    assert_eq!(record.trimmed_designator(), "1957-001B");
    assert_eq!(record.intl_designator.len(), 11);
    assert_eq!(record.catalog_number, 2);
    assert!(!record.multiple_names);
    assert!(record.payload);
    assert_eq!(record.operational_status, 'D');
    assert_eq!(record.trimmed_name(), "SPUTNIK 1");
    assert_eq!(record.name.len(), 24);
    assert_eq!(record.trimmed_source(), "CIS");
    assert_eq!(
        record.launch_date,
        ScDate {
            year: 1957,
            month: 10,
            day: 4
        }
    );
    assert_eq!(record.trimmed_launch_site(), "TYMSC");
    assert_eq!(
        record.decay_date,
        ScDate {
            year: 1958,
            month: 1,
            day: 3
        }
    );
    assert!((record.period_min - 96.1).abs() < 1e-9);
    assert!((record.inclination_deg - 65.1).abs() < 1e-9);
    assert_eq!(record.apogee_km, 1080);
    assert_eq!(record.perigee_km, 64);
    assert!((record.radar_cross_section - 0.0841).abs() < 1e-9);
    assert_eq!(record.status_code, "   ");
}

#[test]
fn test_catalog_number_and_status_fixture() {
    // Catalog-number bytes "00001" and status '+' must come out as 1 / '+'
    let mut line = sputnik_line();
    place(&mut line, layout::CATALOG_NUMBER.offset, "00001");
    place(&mut line, layout::OPERATIONAL_STATUS.offset, "+");

    let record = decode(&line).unwrap();
    assert_eq!(record.catalog_number, 1);
    assert_eq!(record.operational_status, '+');
}

#[test]
fn test_decode_is_idempotent() {
    let line = sputnik_line();
    let first = decode(&line).unwrap();
    let second = decode(&line).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_decode_does_not_mutate_input() {
    let line = sputnik_line();
    let copy = line.clone();
    let _ = decode(&line).unwrap();
    assert_eq!(line, copy);
}

#[test]
fn test_blank_decay_marker_wins_over_garbage_span() {
    let mut line = sputnik_line();
    // Blank marker byte, garbage behind it: the span must never be read
    place(&mut line, layout::DECAY_DATE.offset, " 958#01?03");

    let record = decode(&line).unwrap();
    assert_eq!(record.decay_date, ScDate::unknown());
    assert!(!record.has_decayed());
}

#[test]
fn test_missing_rcs_marker_decodes_to_zero() {
    let mut line = sputnik_line();
    // Digits throughout the span but no '.' at the marker column
    place(&mut line, layout::RADAR_CROSS_SECTION.offset, "12345678");

    let record = decode(&line).unwrap();
    assert_eq!(record.radar_cross_section, 0.0);
}

#[test]
fn test_on_orbit_line_sentinels() {
    let record = decode(&on_orbit_line()).unwrap();
    assert_eq!(record.decay_date, ScDate::unknown());
    assert_eq!(record.radar_cross_section, 0.0);
    assert!(record.multiple_names);
    assert_eq!(record.operational_status, '-');
}

#[test]
fn test_minimum_width_boundary() {
    let line = sputnik_line();
    assert_eq!(line.len(), RECORD_WIDTH);
    assert!(decode(&line).is_ok());

    let short = &line[..RECORD_WIDTH - 1];
    match decode(short) {
        Err(Error::OutOfBounds { expected, actual }) => {
            assert_eq!(expected, RECORD_WIDTH);
            assert_eq!(actual, RECORD_WIDTH - 1);
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_longer_line_is_accepted() {
    let mut line = sputnik_line();
    line.extend_from_slice(b"   trailing annotation");
    assert!(decode(&line).is_ok());
}

#[test]
fn test_blank_numeric_field_decodes_to_zero() {
    let mut line = sputnik_line();
    place(&mut line, layout::APOGEE.offset, "      ");

    let record = decode(&line).unwrap();
    assert_eq!(record.apogee_km, 0);
}

#[test]
fn test_lenient_decode_of_garbage_digits() {
    // Decoding is defined even on malformed input: the digit-run prefix wins
    let mut line = sputnik_line();
    place(&mut line, layout::CATALOG_NUMBER.offset, "12X45");

    let record = decode(&line).unwrap();
    assert_eq!(record.catalog_number, 12);
}
