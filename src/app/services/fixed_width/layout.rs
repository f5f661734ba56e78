//! Fixed-column layout table for SATCAT record lines
//!
//! The authoritative set of (offset, length, kind) descriptors for every
//! field in a record line. Offsets are 0-based byte positions. This table is
//! the single source of truth consumed by both the decoder and the
//! validator; neither module carries its own copy of an offset.

use crate::constants::{
    MULTIPLE_NAMES_ALPHABET, OPERATIONAL_STATUS_ALPHABET, PAYLOAD_ALPHABET,
};

/// Semantic type of a fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Raw character field, copied verbatim including padding
    RawString,

    /// Base-10 unsigned integer, right-aligned with space padding
    UnsignedInt,

    /// Fixed-point decimal with a literal `'.'` at `point` bytes into the field
    FixedPoint { point: usize },

    /// `YYYY-MM-DD` date triple; an all-blank span means unknown
    DateTriple,

    /// Date triple whose leading byte doubles as a presence marker; a blank
    /// marker means the date is absent and decodes to the zero sentinel
    OptionalDateTriple,

    /// Fixed-point decimal whose `'.'` column doubles as a presence marker;
    /// without the marker the field is absent and decodes to 0.0
    OptionalFixedPoint { point: usize },

    /// Single-byte flag restricted to an allowed alphabet
    FlagChar { allowed: &'static [u8] },
}

/// One field descriptor: name, 0-based byte offset, width, and semantic kind
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Byte offset one past the end of this field
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

// =============================================================================
// Date Sub-Field Offsets (relative to the start of a date field)
// =============================================================================

pub const DATE_YEAR_OFFSET: usize = 0;
pub const DATE_YEAR_LEN: usize = 4;
pub const DATE_MONTH_OFFSET: usize = 5;
pub const DATE_MONTH_LEN: usize = 2;
pub const DATE_DAY_OFFSET: usize = 8;
pub const DATE_DAY_LEN: usize = 2;

// =============================================================================
// Fixed-Point Decimal Offsets (relative to the start of their field)
// =============================================================================

/// Offset of the `'.'` within the orbital period field
pub const PERIOD_DECIMAL_OFFSET: usize = 5;

/// Offset of the `'.'` within the inclination field
pub const INCLINATION_DECIMAL_OFFSET: usize = 3;

/// Offset of the `'.'` within the radar cross-section field; this byte is
/// also the field's presence marker
pub const RCS_DECIMAL_OFFSET: usize = 3;

// =============================================================================
// Field Descriptors
// =============================================================================

pub const INTL_DESIGNATOR: FieldSpec = FieldSpec {
    name: "intl_designator",
    offset: 0,
    len: 11,
    kind: FieldKind::RawString,
};

pub const CATALOG_NUMBER: FieldSpec = FieldSpec {
    name: "catalog_number",
    offset: 13,
    len: 5,
    kind: FieldKind::UnsignedInt,
};

pub const MULTIPLE_NAMES: FieldSpec = FieldSpec {
    name: "multiple_names",
    offset: 19,
    len: 1,
    kind: FieldKind::FlagChar {
        allowed: MULTIPLE_NAMES_ALPHABET,
    },
};

pub const PAYLOAD: FieldSpec = FieldSpec {
    name: "payload",
    offset: 20,
    len: 1,
    kind: FieldKind::FlagChar {
        allowed: PAYLOAD_ALPHABET,
    },
};

pub const OPERATIONAL_STATUS: FieldSpec = FieldSpec {
    name: "operational_status",
    offset: 21,
    len: 1,
    kind: FieldKind::FlagChar {
        allowed: OPERATIONAL_STATUS_ALPHABET,
    },
};

pub const NAME: FieldSpec = FieldSpec {
    name: "name",
    offset: 23,
    len: 24,
    kind: FieldKind::RawString,
};

pub const SOURCE: FieldSpec = FieldSpec {
    name: "source",
    offset: 49,
    len: 5,
    kind: FieldKind::RawString,
};

pub const LAUNCH_DATE: FieldSpec = FieldSpec {
    name: "launch_date",
    offset: 56,
    len: 10,
    kind: FieldKind::DateTriple,
};

pub const LAUNCH_SITE: FieldSpec = FieldSpec {
    name: "launch_site",
    offset: 68,
    len: 5,
    kind: FieldKind::RawString,
};

pub const DECAY_DATE: FieldSpec = FieldSpec {
    name: "decay_date",
    offset: 75,
    len: 10,
    kind: FieldKind::OptionalDateTriple,
};

pub const PERIOD: FieldSpec = FieldSpec {
    name: "period_min",
    offset: 87,
    len: 7,
    kind: FieldKind::FixedPoint {
        point: PERIOD_DECIMAL_OFFSET,
    },
};

pub const INCLINATION: FieldSpec = FieldSpec {
    name: "inclination_deg",
    offset: 96,
    len: 5,
    kind: FieldKind::FixedPoint {
        point: INCLINATION_DECIMAL_OFFSET,
    },
};

pub const APOGEE: FieldSpec = FieldSpec {
    name: "apogee_km",
    offset: 103,
    len: 6,
    kind: FieldKind::UnsignedInt,
};

pub const PERIGEE: FieldSpec = FieldSpec {
    name: "perigee_km",
    offset: 111,
    len: 6,
    kind: FieldKind::UnsignedInt,
};

pub const RADAR_CROSS_SECTION: FieldSpec = FieldSpec {
    name: "radar_cross_section",
    offset: 119,
    len: 8,
    kind: FieldKind::OptionalFixedPoint {
        point: RCS_DECIMAL_OFFSET,
    },
};

pub const STATUS_CODE: FieldSpec = FieldSpec {
    name: "status_code",
    offset: 129,
    len: 3,
    kind: FieldKind::RawString,
};

/// All fields of a record line, in column order
pub const LAYOUT: &[FieldSpec] = &[
    INTL_DESIGNATOR,
    CATALOG_NUMBER,
    MULTIPLE_NAMES,
    PAYLOAD,
    OPERATIONAL_STATUS,
    NAME,
    SOURCE,
    LAUNCH_DATE,
    LAUNCH_SITE,
    DECAY_DATE,
    PERIOD,
    INCLINATION,
    APOGEE,
    PERIGEE,
    RADAR_CROSS_SECTION,
    STATUS_CODE,
];

const fn max_field_end(fields: &[FieldSpec]) -> usize {
    let mut width = 0;
    let mut i = 0;
    while i < fields.len() {
        let end = fields[i].offset + fields[i].len;
        if end > width {
            width = end;
        }
        i += 1;
    }
    width
}

/// Total record width in bytes, derived from the layout table
pub const RECORD_WIDTH: usize = max_field_end(LAYOUT);
