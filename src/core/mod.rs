//! Core data types for run count reconciliation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SampleLaneKey`]: Identity of one (sample, lane) unit of work
//! - [`SampleSheet`], [`SampleSheetEntry`]: The expected-unit input supplied
//!   by the surrounding pipeline
//! - [`Stage`]: The three counted pipeline stages
//! - [`StageCountTable`], [`StageCounts`], [`RunCountTable`]: Per-stage and
//!   reconciled count tables
//!
//! ## Lane normalization
//!
//! Artifact names zero-pad lane numbers (`L001`, `L010`) while sample sheets
//! typically do not. Keys always carry the unpadded decimal form, so counts
//! from differently padded sources land on the same row.

pub mod key;
pub mod sheet;
pub mod table;

pub use key::SampleLaneKey;
pub use sheet::{SampleSheet, SampleSheetEntry};
pub use table::{RunCountTable, Stage, StageCountTable, StageCounts};
