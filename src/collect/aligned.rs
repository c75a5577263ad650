//! Aligned-stage collector: minimap2 read counts via samtools logs.
//!
//! The alignment step pipes minimap2 output through samtools, leaving one log
//! per read file in `<run>/<project>/samtools/`. The forward read's log is the
//! unit's representative, as in the filtered stage.

use std::path::Path;

use crate::collect::scan::collect_stage_counts;
use crate::collect::{CollectError, StageReport};
use crate::core::sheet::SampleSheet;
use crate::core::table::Stage;
use crate::parsing::samtools;

/// Collect aligned counts for every (sample, lane) unit the sheet expects and
/// an alignment log exists for.
///
/// # Errors
///
/// Returns `CollectError::Io` if a project subdirectory cannot be read, or
/// `CollectError::DuplicateUnit` if two logs resolve to the same unit.
/// Per-file parse failures land in the report's `failures`, not here.
pub fn collect(run_dir: &Path, sheet: &SampleSheet) -> Result<StageReport<f64>, CollectError> {
    collect_stage_counts(
        run_dir,
        sheet,
        Stage::Aligned,
        "samtools",
        ".log",
        samtools::parse_log_file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::SampleLaneKey;
    use crate::core::sheet::SampleSheetEntry;
    use std::fs;

    fn samtools_log(records: u64) -> String {
        format!("[M::bam2fq_mainloop] processed {records} reads\n")
    }

    #[test]
    fn test_collect_aligned_counts() {
        let run = tempfile::tempdir().unwrap();
        let log_dir = run.path().join("Trojecp_666").join("samtools");
        fs::create_dir_all(&log_dir).unwrap();
        fs::write(
            log_dir.join("sample4_S369_L003_R1_001.log"),
            samtools_log(5554),
        )
        .unwrap();

        let sheet = SampleSheet::new(vec![SampleSheetEntry::new("sample4", "Trojecp_666", "3")]);
        let report = collect(run.path(), &sheet).unwrap();

        assert!(report.failures.is_empty());
        assert_eq!(report.counts.len(), 1);
        let count = report.counts[&SampleLaneKey::new("sample4", "3")];
        assert!((count - 2777.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_log_without_summary_line_is_isolated() {
        let run = tempfile::tempdir().unwrap();
        let log_dir = run.path().join("Baz").join("samtools");
        fs::create_dir_all(&log_dir).unwrap();
        fs::write(
            log_dir.join("sample1_S1_L001_R1_001.log"),
            "[main] CMD: samtools fastq -\n",
        )
        .unwrap();

        let sheet = SampleSheet::new(vec![SampleSheetEntry::new("sample1", "Baz", "1")]);
        let report = collect(run.path(), &sheet).unwrap();

        assert!(report.counts.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, Stage::Aligned);
    }

    #[test]
    fn test_only_expected_lane_is_scanned() {
        let run = tempfile::tempdir().unwrap();
        let log_dir = run.path().join("Baz").join("samtools");
        fs::create_dir_all(&log_dir).unwrap();
        fs::write(
            log_dir.join("sample1_S1_L001_R1_001.log"),
            samtools_log(200),
        )
        .unwrap();
        fs::write(
            log_dir.join("sample1_S1_L002_R1_001.log"),
            samtools_log(400),
        )
        .unwrap();

        // Sheet only expects lane 1
        let sheet = SampleSheet::new(vec![SampleSheetEntry::new("sample1", "Baz", "1")]);
        let report = collect(run.path(), &sheet).unwrap();

        assert_eq!(report.counts.len(), 1);
        assert!(report
            .counts
            .contains_key(&SampleLaneKey::new("sample1", "1")));
    }
}
