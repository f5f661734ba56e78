//! Application constants for the SATCAT parser
//!
//! This module contains the marker characters and code alphabets used
//! throughout the parser. Column offsets live in the layout table
//! (`app::services::fixed_width::layout`), not here.

// =============================================================================
// Marker Characters
// =============================================================================

/// Marker in the multiple-names column indicating the object has other names
pub const MULTIPLE_NAMES_MARKER: u8 = b'M';

/// Marker in the payload column indicating the object is a payload
pub const PAYLOAD_MARKER: u8 = b'*';

/// Literal decimal point in fixed-point fields; doubles as the presence
/// marker for the radar cross-section field
pub const DECIMAL_POINT: u8 = b'.';

/// Separator between the year/month/day sub-fields of a date
pub const DATE_SEPARATOR: u8 = b'-';

/// Padding byte for unused columns and absent optional fields
pub const FIELD_PAD: u8 = b' ';

// =============================================================================
// Marker Column Alphabets
// =============================================================================

/// Allowed bytes in the multiple-names marker column
pub const MULTIPLE_NAMES_ALPHABET: &[u8] = b"M ";

/// Allowed bytes in the payload marker column
pub const PAYLOAD_ALPHABET: &[u8] = b"* ";

/// Allowed bytes in the operational status column (blank = not reported)
pub const OPERATIONAL_STATUS_ALPHABET: &[u8] = b"+-PBSXD? ";

// =============================================================================
// Operational Status Codes
// =============================================================================

/// Operational status code values as defined by the catalogue format
pub mod operational_status {
    /// Object is operational
    pub const OPERATIONAL: char = '+';

    /// Object is nonoperational
    pub const NONOPERATIONAL: char = '-';

    /// Object is partially operational
    pub const PARTIALLY_OPERATIONAL: char = 'P';

    /// Object is in backup/standby
    pub const BACKUP: char = 'B';

    /// Object is a spare
    pub const SPARE: char = 'S';

    /// Object is on an extended mission
    pub const EXTENDED_MISSION: char = 'X';

    /// Object has decayed
    pub const DECAYED: char = 'D';

    /// Operational status is unknown
    pub const UNKNOWN: char = '?';

    /// All operational status code values
    pub const ALL_VALUES: &[char] = &[
        OPERATIONAL,
        NONOPERATIONAL,
        PARTIALLY_OPERATIONAL,
        BACKUP,
        SPARE,
        EXTENDED_MISSION,
        DECAYED,
        UNKNOWN,
    ];
}
