//! Data models for decoded SATCAT records
//!
//! This module contains the core data structures produced by the fixed-width
//! decoder: the satellite catalogue entry and its calendar date triple.
//! Records are built once per input line and never mutated afterwards.

use crate::constants::operational_status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Date Triple
// =============================================================================

/// Calendar date triple from a catalogue record
///
/// The all-zero triple is the format's "unknown / not applicable" sentinel,
/// used for objects with no decay date and for unknown launch dates. It is a
/// normal value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ScDate {
    /// The all-zero "unknown / not applicable" sentinel
    pub const fn unknown() -> Self {
        Self {
            year: 0,
            month: 0,
            day: 0,
        }
    }

    /// Check whether this date is the unknown sentinel
    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }

    /// Convert to a calendar date
    ///
    /// Returns `None` for the unknown sentinel and for triples that do not
    /// form a real calendar date (the decoder is lenient and can produce
    /// such triples from malformed input).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.is_unknown() {
            return None;
        }
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
    }
}

impl fmt::Display for ScDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "unknown")
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

// =============================================================================
// Catalogue Record
// =============================================================================

/// One decoded satellite catalogue entry
///
/// Fixed-width string fields are copied verbatim from the record line,
/// including trailing padding, so every string field is exactly its declared
/// width. Use the `trimmed_*` accessors when padding is unwanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatCat {
    /// International designator (11 characters, raw copy)
    pub intl_designator: String,

    /// NORAD catalogue number
    pub catalog_number: u32,

    /// Whether the object is known under multiple names
    pub multiple_names: bool,

    /// Whether the object is a payload (as opposed to debris or a rocket body)
    pub payload: bool,

    /// Operational status code (see `constants::operational_status`)
    pub operational_status: char,

    /// Satellite name (24 characters, raw copy)
    pub name: String,

    /// Source code of the owning organisation (5 characters, raw copy)
    pub source: String,

    /// Launch date; the zero triple means unknown
    pub launch_date: ScDate,

    /// Launch site code (5 characters, raw copy)
    pub launch_site: String,

    /// Decay date; the zero triple means still on orbit or unknown
    pub decay_date: ScDate,

    /// Orbital period in minutes
    pub period_min: f64,

    /// Orbital inclination in degrees
    pub inclination_deg: f64,

    /// Apogee altitude in kilometres
    pub apogee_km: u32,

    /// Perigee altitude in kilometres
    pub perigee_km: u32,

    /// Radar cross-section in square metres; 0.0 when not reported
    pub radar_cross_section: f64,

    /// Orbital status code (3 characters, raw copy)
    pub status_code: String,
}

impl SatCat {
    /// International designator with the fixed-width padding removed
    pub fn trimmed_designator(&self) -> &str {
        self.intl_designator.trim_end()
    }

    /// Satellite name with the fixed-width padding removed
    pub fn trimmed_name(&self) -> &str {
        self.name.trim_end()
    }

    /// Source code with the fixed-width padding removed
    pub fn trimmed_source(&self) -> &str {
        self.source.trim_end()
    }

    /// Launch site code with the fixed-width padding removed
    pub fn trimmed_launch_site(&self) -> &str {
        self.launch_site.trim_end()
    }

    /// Check whether the record carries a decay date
    pub fn has_decayed(&self) -> bool {
        !self.decay_date.is_unknown()
    }

    /// Check whether the operational status marks the object as operational
    /// (fully, partially, backup, spare, or extended mission)
    pub fn is_operational(&self) -> bool {
        matches!(
            self.operational_status,
            operational_status::OPERATIONAL
                | operational_status::PARTIALLY_OPERATIONAL
                | operational_status::BACKUP
                | operational_status::SPARE
                | operational_status::EXTENDED_MISSION
        )
    }
}
