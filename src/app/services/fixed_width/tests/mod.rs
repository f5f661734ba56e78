//! Test utilities and fixtures for the fixed-width parser tests
//!
//! Fixture lines are built by placing field text into a space-filled buffer
//! at the layout offsets; the layout tests pin those offsets to their
//! literal column positions so a table regression cannot hide here.

mod decoder_tests;

use crate::app::services::fixed_width::layout::{self, RECORD_WIDTH};

/// Place `text` at `offset` in a record line buffer
pub fn place(line: &mut [u8], offset: usize, text: &str) {
    line[offset..offset + text.len()].copy_from_slice(text.as_bytes());
}

/// A well-formed line describing Sputnik 1 (catalogue number 2)
pub fn sputnik_line() -> Vec<u8> {
    let mut line = vec![b' '; RECORD_WIDTH];
    place(&mut line, layout::INTL_DESIGNATOR.offset, "1957-001B");
    place(&mut line, layout::CATALOG_NUMBER.offset, "00002");
    place(&mut line, layout::PAYLOAD.offset, "*");
    place(&mut line, layout::OPERATIONAL_STATUS.offset, "D");
    place(&mut line, layout::NAME.offset, "SPUTNIK 1");
    place(&mut line, layout::SOURCE.offset, "CIS");
    place(&mut line, layout::LAUNCH_DATE.offset, "1957-10-04");
    place(&mut line, layout::LAUNCH_SITE.offset, "TYMSC");
    place(&mut line, layout::DECAY_DATE.offset, "1958-01-03");
    place(&mut line, layout::PERIOD.offset, "   96.1");
    place(&mut line, layout::INCLINATION.offset, " 65.1");
    place(&mut line, layout::APOGEE.offset, "  1080");
    place(&mut line, layout::PERIGEE.offset, "    64");
    place(&mut line, layout::RADAR_CROSS_SECTION.offset, "  0.0841");
    line
}

/// A well-formed line for an object still on orbit, with no decay date and
/// no reported radar cross-section ("N/A" at the RCS span)
pub fn on_orbit_line() -> Vec<u8> {
    let mut line = vec![b' '; RECORD_WIDTH];
    place(&mut line, layout::INTL_DESIGNATOR.offset, "1958-002B");
    place(&mut line, layout::CATALOG_NUMBER.offset, "00005");
    place(&mut line, layout::MULTIPLE_NAMES.offset, "M");
    place(&mut line, layout::PAYLOAD.offset, "*");
    place(&mut line, layout::OPERATIONAL_STATUS.offset, "-");
    place(&mut line, layout::NAME.offset, "VANGUARD 1");
    place(&mut line, layout::SOURCE.offset, "US");
    place(&mut line, layout::LAUNCH_DATE.offset, "1958-03-17");
    place(&mut line, layout::LAUNCH_SITE.offset, "AFETR");
    place(&mut line, layout::PERIOD.offset, "  132.8");
    place(&mut line, layout::INCLINATION.offset, " 34.2");
    place(&mut line, layout::APOGEE.offset, "  3832");
    place(&mut line, layout::PERIGEE.offset, "   652");
    place(&mut line, layout::RADAR_CROSS_SECTION.offset, "N/A");
    line
}
