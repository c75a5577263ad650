//! Parsers for the artifacts each pipeline stage leaves behind.
//!
//! This module provides parsers for:
//!
//! - **Artifact filenames**: Recover (sample, lane) identity from
//!   Illumina-convention read-file names
//! - **Demultiplexing stats**: Per-sample, per-lane read counts from
//!   bcl2fastq's `Stats/Stats.json`
//! - **fastp reports**: Post-filtering read totals from fastp's JSON report
//! - **samtools logs**: Aligned read totals from samtools' plain-text output
//!
//! Each file-based parser has a `_text` twin that parses from an in-memory
//! string, which is what the unit tests exercise.

pub mod demux;
pub mod fastp;
pub mod filename;
pub mod samtools;

use thiserror::Error;

/// A log/report file is present but its content is not what the stage's tool
/// should have produced.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed report: {0}")]
    Malformed(String),
}
