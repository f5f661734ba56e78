//! Layout-driven record validation
//!
//! Classifies the bytes of a raw line against the character class each
//! layout field declares, without decoding anything. Validation and
//! decoding consume the same layout table, so the two passes cannot drift
//! apart on offsets.
//!
//! The validator is strictly stricter than the decoder: every line it
//! accepts decodes cleanly, while lines it rejects may still decode to
//! best-effort values.

use super::layout::{
    DATE_DAY_LEN, DATE_DAY_OFFSET, DATE_MONTH_LEN, DATE_MONTH_OFFSET, DATE_YEAR_LEN,
    DATE_YEAR_OFFSET, FieldKind, FieldSpec, LAYOUT, RECORD_WIDTH,
};
use crate::constants::{DATE_SEPARATOR, DECIMAL_POINT, FIELD_PAD};
use crate::{Error, Result};

/// Validate one catalogue line against the shared layout table
///
/// Returns the first failing field by name. The line length is checked
/// before any field, so no read ever goes past the end of the input.
pub fn validate(line: &[u8]) -> Result<()> {
    if line.len() < RECORD_WIDTH {
        return Err(Error::out_of_bounds(RECORD_WIDTH, line.len()));
    }

    for field in LAYOUT {
        validate_field(line, field)?;
    }
    Ok(())
}

/// Single-verdict convenience wrapper around [`validate`]
pub fn is_valid(line: &[u8]) -> bool {
    validate(line).is_ok()
}

fn validate_field(line: &[u8], field: &FieldSpec) -> Result<()> {
    let span = &line[field.offset..field.end()];
    match field.kind {
        FieldKind::RawString => check_printable(span, field),
        FieldKind::UnsignedInt => check_uint(span, field.name, field.offset),
        FieldKind::FixedPoint { point } => check_fixed_point(span, point, field),
        FieldKind::DateTriple => check_date(span, field),
        FieldKind::OptionalDateTriple => {
            if span.iter().all(|&b| b == FIELD_PAD) {
                return Ok(());
            }
            // A blank marker byte with non-blank bytes behind it cannot have
            // come from the catalogue, even though the decoder would shrug
            // and emit the sentinel.
            if span[0] == FIELD_PAD {
                return Err(Error::malformed_field(
                    field.name,
                    format!(
                        "blank presence marker at column {} over a non-blank date span",
                        field.offset
                    ),
                ));
            }
            check_date(span, field)
        }
        FieldKind::OptionalFixedPoint { point } => {
            if span[point] == DECIMAL_POINT {
                check_fixed_point(span, point, field)
            } else {
                // Field absent; the catalogue writes "N/A" here, so the span
                // only needs to be printable.
                check_printable(span, field)
            }
        }
        FieldKind::FlagChar { allowed } => {
            if allowed.contains(&span[0]) {
                Ok(())
            } else {
                Err(Error::malformed_field(
                    field.name,
                    format!(
                        "byte '{}' at column {} outside allowed set {:?}",
                        span[0] as char,
                        field.offset,
                        String::from_utf8_lossy(allowed)
                    ),
                ))
            }
        }
    }
}

/// Unsigned integer spans are leading spaces followed by digits running to
/// the end of the span. An all-blank span is accepted: the live catalogue
/// leaves numeric fields blank for deep-space objects, and such spans decode
/// to the 0 sentinel. No sign is permitted; no catalogue field is signed.
fn check_uint(span: &[u8], field: &'static str, col: usize) -> Result<()> {
    let mut seen_digit = false;
    for (i, &b) in span.iter().enumerate() {
        match b {
            b' ' if !seen_digit => {}
            b'0'..=b'9' => seen_digit = true,
            _ => {
                return Err(Error::malformed_field(
                    field,
                    format!(
                        "unexpected byte '{}' at column {} in numeric field",
                        b as char,
                        col + i
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn check_fixed_point(span: &[u8], point: usize, field: &FieldSpec) -> Result<()> {
    if span[point] != DECIMAL_POINT {
        return Err(Error::malformed_field(
            field.name,
            format!(
                "expected '.' at column {}, found '{}'",
                field.offset + point,
                span[point] as char
            ),
        ));
    }
    check_uint(&span[..point], field.name, field.offset)?;
    for (i, &b) in span[point + 1..].iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(Error::malformed_field(
                field.name,
                format!(
                    "non-digit byte '{}' at column {} in fractional part",
                    b as char,
                    field.offset + point + 1 + i
                ),
            ));
        }
    }
    Ok(())
}

/// Dates are either entirely blank (the unknown sentinel) or digits at the
/// year/month/day sub-offsets with literal separators between them.
fn check_date(span: &[u8], field: &FieldSpec) -> Result<()> {
    if span.iter().all(|&b| b == FIELD_PAD) {
        return Ok(());
    }

    for sep_offset in [DATE_YEAR_LEN, DATE_MONTH_OFFSET + DATE_MONTH_LEN] {
        if span[sep_offset] != DATE_SEPARATOR {
            return Err(Error::malformed_field(
                field.name,
                format!(
                    "expected '-' separator at column {}, found '{}'",
                    field.offset + sep_offset,
                    span[sep_offset] as char
                ),
            ));
        }
    }

    check_uint(
        &span[DATE_YEAR_OFFSET..DATE_YEAR_OFFSET + DATE_YEAR_LEN],
        field.name,
        field.offset + DATE_YEAR_OFFSET,
    )?;
    check_uint(
        &span[DATE_MONTH_OFFSET..DATE_MONTH_OFFSET + DATE_MONTH_LEN],
        field.name,
        field.offset + DATE_MONTH_OFFSET,
    )?;
    check_uint(
        &span[DATE_DAY_OFFSET..DATE_DAY_OFFSET + DATE_DAY_LEN],
        field.name,
        field.offset + DATE_DAY_OFFSET,
    )
}

fn check_printable(span: &[u8], field: &FieldSpec) -> Result<()> {
    for (i, &b) in span.iter().enumerate() {
        if !(b.is_ascii_graphic() || b == FIELD_PAD) {
            return Err(Error::malformed_field(
                field.name,
                format!("non-printable byte 0x{:02x} at column {}", b, field.offset + i),
            ));
        }
    }
    Ok(())
}
