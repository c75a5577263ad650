//! Parser for fastp JSON reports.
//!
//! fastp writes one JSON report per input file. The single value this crate
//! needs is the read total after filtering, at
//! `summary.after_filtering.total_reads`.

use std::path::Path;

use serde::Deserialize;

use crate::parsing::ParseError;

#[derive(Debug, Deserialize)]
struct FastpReport {
    summary: Summary,
}

#[derive(Debug, Deserialize)]
struct Summary {
    after_filtering: AfterFiltering,
}

#[derive(Debug, Deserialize)]
struct AfterFiltering {
    total_reads: u64,
}

/// Extract the post-filtering read total from a fastp JSON report
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or `ParseError::Json`
/// if it is not valid JSON or `summary.after_filtering.total_reads` is absent.
pub fn parse_report_file(path: &Path) -> Result<u64, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_report_text(&content)
}

/// Extract the post-filtering read total from fastp JSON report content
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not valid JSON or the expected
/// field path is absent.
pub fn parse_report_text(text: &str) -> Result<u64, ParseError> {
    let report: FastpReport = serde_json::from_str(text)?;
    Ok(report.summary.after_filtering.total_reads)
}
