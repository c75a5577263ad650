//! Parser for samtools' plain-text processing log.
//!
//! Piping minimap2 output through `samtools fastq` leaves a line-oriented log
//! whose summary line reads `[M::bam2fq_mainloop] processed 5554 reads`. That
//! total counts the records written to the forward and reverse files
//! together, so the per-pair count is half of it. Halving can yield a
//! non-integral value when one orientation was truncated by an upstream tool,
//! which is why the aligned stage reports `f64`.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::parsing::ParseError;

lazy_static! {
    static ref PROCESSED_READS_REGEX: Regex =
        Regex::new(r"\[.*\] processed (\d+) reads").unwrap();
}

/// Extract the per-pair read count from a samtools log file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Malformed` if no `processed ... reads` line is found or its
/// value does not fit a 64-bit count.
pub fn parse_log_file(path: &Path) -> Result<f64, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_log_text(&content)
}

/// Extract the per-pair read count from samtools log content
///
/// # Errors
///
/// Returns `ParseError::Malformed` if no `processed ... reads` line is found
/// or its value does not fit a 64-bit count.
pub fn parse_log_text(text: &str) -> Result<f64, ParseError> {
    let cap = PROCESSED_READS_REGEX
        .captures(text)
        .ok_or_else(|| ParseError::Malformed("no 'processed ... reads' line found".to_string()))?;

    let records: u64 = cap[1]
        .parse()
        .map_err(|_| ParseError::Malformed(format!("unparseable read count: {}", &cap[1])))?;

    // The log counts forward and reverse records together
    Ok(records as f64 / 2.0)
}
