//! Raw-stage collector: demultiplexer read counts.
//!
//! The demultiplexer reports per-sample, per-lane totals itself in
//! `Stats/Stats.json` at the top of the run directory, so this stage needs no
//! filename parsing and never re-sums counts from individual fastq files.

use std::path::Path;

use crate::collect::{CollectError, StageReport};
use crate::core::sheet::SampleSheet;
use crate::core::table::{Stage, StageCountTable};
use crate::parsing::demux;

/// Collect raw demultiplexing counts for a run.
///
/// The sample sheet is accepted for interface symmetry with the other
/// collectors; the platform report is already scoped to the run.
///
/// # Errors
///
/// Returns `CollectError::Report` if `Stats/Stats.json` is missing or
/// malformed (it is the stage's single artifact, so there is nothing to
/// isolate), or `CollectError::DuplicateUnit` if the report lists the same
/// (sample, lane) twice.
pub fn collect(run_dir: &Path, _sheet: &SampleSheet) -> Result<StageReport<u64>, CollectError> {
    let path = run_dir.join("Stats").join("Stats.json");
    let parsed = demux::parse_stats_file(&path).map_err(|source| CollectError::Report {
        path: path.clone(),
        source,
    })?;

    let mut counts = StageCountTable::new();
    for (key, count) in parsed {
        if counts.insert(key.clone(), count).is_some() {
            return Err(CollectError::DuplicateUnit {
                stage: Stage::Raw,
                sample: key.sample_id,
                lane: key.lane,
            });
        }
    }

    Ok(StageReport {
        counts,
        failures: Vec::new(),
    })
}
