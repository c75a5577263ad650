//! # run-counts
//!
//! A library for reconciling per-sample, per-lane read counts across the
//! stages of a sequencing-run processing pipeline.
//!
//! Each stage of the pipeline — raw demultiplexing (bcl2fastq), quality
//! filtering (fastp), reference alignment (minimap2 via samtools) — reports
//! read counts in its own format: a run-wide JSON aggregate, per-file JSON
//! reports, per-file plain-text logs. The counts belong together, but the
//! artifacts only agree on identity through loosely structured Illumina-style
//! filenames.
//!
//! `run-counts` recovers a stable (sample, lane) key from each artifact,
//! collects every stage's counts independently, and outer-joins them into one
//! table where a stage that never saw a unit is recorded as missing — never
//! as zero.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use run_counts::{run_counts, SampleSheet, SampleSheetEntry};
//!
//! let sheet = SampleSheet::new(vec![
//!     SampleSheetEntry::new("sample1", "Project_A", "1"),
//!     SampleSheetEntry::new("sample2", "Project_A", "1"),
//! ]);
//!
//! let report = run_counts(Path::new("200318_A00953_0082_AH5TWYDSXY"), &sheet).unwrap();
//!
//! for (key, counts) in report.table.rows() {
//!     println!("{key}: raw={:?} filtered={:?} aligned={:?}",
//!              counts.raw, counts.filtered, counts.aligned);
//! }
//! for failure in &report.failures {
//!     eprintln!("skipped: {failure}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Keys, sample-sheet input, and count-table types
//! - [`parsing`]: Parsers for filenames and the three artifact formats
//! - [`collect`]: The three independent per-stage collectors
//! - [`aggregate`]: The outer join and the `run_counts` entry point

pub mod aggregate;
pub mod collect;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::aggregate::{outer_join, run_counts, RunReport};
pub use crate::collect::{CollectError, StageReport, UnitFailure};
pub use crate::core::key::SampleLaneKey;
pub use crate::core::sheet::{SampleSheet, SampleSheetEntry};
pub use crate::core::table::{RunCountTable, Stage, StageCountTable, StageCounts};
pub use crate::parsing::filename::FormatError;
pub use crate::parsing::ParseError;
