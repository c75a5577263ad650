//! Per-stage count collectors.
//!
//! One collector per pipeline stage, each independent of the others:
//!
//! - [`raw`]: per-sample, per-lane totals from the demultiplexer's own
//!   `Stats/Stats.json` aggregate report
//! - [`filtered`]: post-filtering totals from per-unit fastp JSON reports
//! - [`aligned`]: aligned totals from per-unit samtools logs
//!
//! Each collector reads files under the run directory, scoped by the sample
//! sheet, and returns a [`StageReport`]: the stage's count table plus any
//! per-unit failures it isolated along the way. A unit with no artifact for a
//! stage is simply absent from that stage's table; absence is not zero.

pub mod aligned;
pub mod filtered;
pub mod raw;
mod scan;

use std::path::PathBuf;

use thiserror::Error;

use crate::core::table::{Stage, StageCountTable};
use crate::parsing::filename::FormatError;
use crate::parsing::ParseError;

/// Why a single unit's artifact was rejected
#[derive(Error, Debug)]
pub enum UnitError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One unit's artifact could not be used. Recorded in the stage report so the
/// rest of the scan carries on; the offending path identifies the unit.
#[derive(Error, Debug)]
#[error("{stage} stage artifact {}: {error}", path.display())]
pub struct UnitFailure {
    pub stage: Stage,
    pub path: PathBuf,
    #[source]
    pub error: UnitError,
}

/// A failure that invalidates a whole stage's scan, as opposed to a single
/// unit's artifact
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Re-running the demultiplexer can leave two artifacts that differ only
    /// in cell number; the unit's identity is then ambiguous.
    #[error("multiple {stage} artifacts map to sample {sample} lane {lane}, only one is expected")]
    DuplicateUnit {
        stage: Stage,
        sample: String,
        lane: String,
    },
}

/// One stage's collected counts plus the per-unit failures isolated during
/// the scan
#[derive(Debug, Default)]
pub struct StageReport<V> {
    pub counts: StageCountTable<V>,
    pub failures: Vec<UnitFailure>,
}
