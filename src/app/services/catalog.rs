//! Batch parsing over newline-delimited catalogue text
//!
//! Owns line splitting so the core decode/validate passes can stay pure and
//! line-oriented. Failures are local to one line: a malformed record is
//! counted, logged, and skipped, and parsing continues with the next line.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::fixed_width::{decoder, validator};
use crate::app::models::SatCat;

/// Aggregate result of a batch parse
#[derive(Debug, Clone)]
pub struct CatalogParseResult {
    /// Successfully decoded catalogue records, in input order
    pub records: Vec<SatCat>,

    /// Batch parsing statistics
    pub stats: ParseStats,
}

/// Batch parsing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of non-empty lines encountered
    pub total_lines: usize,

    /// Number of lines decoded into records
    pub records_decoded: usize,

    /// Number of lines skipped due to validation or decode failures
    pub lines_rejected: usize,

    /// Per-line failure messages for diagnostics
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_decoded as f64 / self.total_lines as f64) * 100.0
        }
    }
}

/// Parse every line of a catalogue dump, validating each before decoding
///
/// Lines failing validation (or too short to decode) are skipped and
/// recorded in the statistics; the rest of the input is still processed.
pub fn parse_catalog(text: &str) -> CatalogParseResult {
    parse_lines(text, true)
}

/// Parse without validation, accepting best-effort values
///
/// Malformed content decodes to the legacy lenient values instead of being
/// rejected; only lines shorter than the record layout are skipped.
pub fn parse_catalog_lenient(text: &str) -> CatalogParseResult {
    parse_lines(text, false)
}

fn parse_lines(text: &str, validate_first: bool) -> CatalogParseResult {
    let mut stats = ParseStats::default();
    let mut records = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        stats.total_lines += 1;

        let bytes = line.as_bytes();
        let result = if validate_first {
            validator::validate(bytes).and_then(|()| decoder::decode(bytes))
        } else {
            decoder::decode(bytes)
        };

        match result {
            Ok(record) => {
                records.push(record);
                stats.records_decoded += 1;
            }
            Err(err) => {
                warn!("Skipping catalogue line {}: {}", line_no + 1, err);
                stats.lines_rejected += 1;
                stats.errors.push(format!("line {}: {}", line_no + 1, err));
            }
        }
    }

    debug!(
        "Decoded {} of {} catalogue lines",
        stats.records_decoded, stats.total_lines
    );
    CatalogParseResult { records, stats }
}
