//! Span-level parsing utilities for fixed-width fields
//!
//! This module provides helper functions for converting the byte span of a
//! single field into its semantic type. All helpers are lenient: they decode
//! best-effort values from malformed content instead of failing, which
//! reproduces the behaviour of the legacy C tooling (`strtol` on a
//! NUL-terminated copy of the span). Strict character-class checking is the
//! validator's job.

use super::layout::{
    DATE_DAY_LEN, DATE_DAY_OFFSET, DATE_MONTH_LEN, DATE_MONTH_OFFSET, DATE_YEAR_LEN,
    DATE_YEAR_OFFSET,
};
use crate::app::models::ScDate;

/// Parse a base-10 unsigned integer from a fixed-width span
///
/// Leading spaces are skipped and parsing stops at the first non-digit
/// byte. A span with no leading digit run decodes to 0; the format leaves
/// all-blank numeric fields undefined, and 0 is the documented sentinel
/// carried over from the original implementation.
pub fn parse_uint(span: &[u8]) -> u32 {
    let mut value: u32 = 0;
    let mut i = 0;
    while i < span.len() && span[i] == b' ' {
        i += 1;
    }
    while i < span.len() && span[i].is_ascii_digit() {
        value = value * 10 + u32::from(span[i] - b'0');
        i += 1;
    }
    value
}

/// Decode a fixed-point decimal with an implied layout: `point` bytes of
/// integral digits, a literal `'.'`, and fractional digits to the end of
/// the span. No floating literal appears in the source text itself.
pub fn parse_fixed_point(span: &[u8], point: usize) -> f64 {
    let decimal_places = span.len() - point - 1;
    let integral = parse_uint(&span[..point]);
    let fraction = parse_uint(&span[point + 1..]);
    f64::from(integral) + f64::from(fraction) / 10f64.powi(decimal_places as i32)
}

/// Decode a `YYYY-MM-DD` span into a date triple
///
/// The separators are format literals and are never parsed. An all-blank
/// span decodes to the zero triple, the format's unknown-date sentinel.
pub fn parse_date(span: &[u8]) -> ScDate {
    ScDate {
        year: parse_uint(&span[DATE_YEAR_OFFSET..DATE_YEAR_OFFSET + DATE_YEAR_LEN]) as u16,
        month: parse_uint(&span[DATE_MONTH_OFFSET..DATE_MONTH_OFFSET + DATE_MONTH_LEN]) as u8,
        day: parse_uint(&span[DATE_DAY_OFFSET..DATE_DAY_OFFSET + DATE_DAY_LEN]) as u8,
    }
}

/// Copy a raw character span into an owned string, preserving padding
pub fn parse_raw_string(span: &[u8]) -> String {
    String::from_utf8_lossy(span).into_owned()
}
