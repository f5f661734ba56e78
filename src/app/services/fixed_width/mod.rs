//! Fixed-width parser for SATCAT record lines
//!
//! The field-extraction and validation engine at the core of the library:
//! a byte-offset-driven decoder that slices a fixed-length line into typed
//! fields, and a companion validator that checks the same offsets against
//! expected character classes without committing to a parse.
//!
//! ## Architecture
//!
//! - [`layout`] - The shared column layout table, the single source of truth
//! - [`field_parsers`] - Span-level conversion helpers for each semantic type
//! - [`decoder`] - Line-to-record decoding, lenient by design
//! - [`validator`] - Layout-driven character-class classification, strict
//!
//! Both passes are pure, stateless, and re-entrant; callers may run them
//! concurrently across independent lines with no shared state.
//!
//! ## Usage
//!
//! ```rust
//! use satcat_parser::app::services::fixed_width::{decode, validate};
//!
//! # fn example(line: &[u8]) -> satcat_parser::Result<()> {
//! validate(line)?;
//! let record = decode(line)?;
//! println!("#{} {}", record.catalog_number, record.trimmed_name());
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod field_parsers;
pub mod layout;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use decoder::decode;
pub use layout::{FieldKind, FieldSpec, LAYOUT, RECORD_WIDTH};
pub use validator::{is_valid, validate};
