//! Filtered-stage collector: fastp read counts.
//!
//! fastp writes one JSON report per read file into `<run>/<project>/json/`.
//! Both orientations of a properly paired run report the same pair total, so
//! the forward read's report stands for the unit.

use std::path::Path;

use crate::collect::scan::collect_stage_counts;
use crate::collect::{CollectError, StageReport};
use crate::core::sheet::SampleSheet;
use crate::core::table::Stage;
use crate::parsing::fastp;

/// Collect post-filtering counts for every (sample, lane) unit the sheet
/// expects and fastp reported on.
///
/// # Errors
///
/// Returns `CollectError::Io` if a project subdirectory cannot be read, or
/// `CollectError::DuplicateUnit` if two reports resolve to the same unit.
/// Per-file parse failures land in the report's `failures`, not here.
pub fn collect(run_dir: &Path, sheet: &SampleSheet) -> Result<StageReport<u64>, CollectError> {
    collect_stage_counts(
        run_dir,
        sheet,
        Stage::Filtered,
        "json",
        ".json",
        fastp::parse_report_file,
    )
}
