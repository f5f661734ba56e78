//! SATCAT Parser Library
//!
//! A Rust library for decoding the fixed-width satellite catalogue (SATCAT)
//! text format into structured records.
//!
//! This library provides tools for:
//! - Decoding fixed-column catalogue lines into typed [`SatCat`] records
//! - Validating raw lines against the column layout before committing to a decode
//! - Resolving short source, launch-site, and status codes to human-readable labels
//! - Batch parsing of newline-delimited catalogue dumps with per-line error recovery
//!
//! The decoder and validator share a single layout table
//! ([`app::services::fixed_width::layout::LAYOUT`]), so column offsets exist in
//! exactly one place. The decoder is deliberately lenient (it reproduces the
//! best-effort behaviour of the legacy C tooling); callers wanting strict
//! rejection of malformed lines run the validator first.

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod code_registry;
        pub mod fixed_width;
    }
}

// Re-export commonly used types
pub use app::models::{SatCat, ScDate};
pub use app::services::fixed_width::{RECORD_WIDTH, decode, is_valid, validate};

/// Result type alias for catalogue parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalogue parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input line shorter than the fixed record layout requires
    #[error("line too short: layout requires {expected} bytes, got {actual}")]
    OutOfBounds { expected: usize, actual: usize },

    /// A field's bytes violate the character class its layout entry declares
    #[error("malformed field '{field}': {reason}")]
    MalformedField { field: &'static str, reason: String },
}

impl Error {
    /// Create an out-of-bounds error for a truncated line
    pub fn out_of_bounds(expected: usize, actual: usize) -> Self {
        Self::OutOfBounds { expected, actual }
    }

    /// Create a malformed-field error naming the offending layout field
    pub fn malformed_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedField {
            field,
            reason: reason.into(),
        }
    }
}
