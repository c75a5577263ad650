use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::key::SampleLaneKey;

/// The pipeline stage an artifact or count belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Raw demultiplexing (bcl2fastq / bcl-convert)
    Raw,
    /// Quality filtering (fastp)
    Filtered,
    /// Reference alignment (minimap2, counted via samtools)
    Aligned,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Filtered => write!(f, "filtered"),
            Self::Aligned => write!(f, "aligned"),
        }
    }
}

/// A single stage's per-unit counts. Units with no artifact for the stage are
/// simply absent; a `BTreeMap` keeps iteration order independent of how the
/// filesystem happened to enumerate files.
pub type StageCountTable<V> = BTreeMap<SampleLaneKey, V>;

/// One row of the reconciled run table: whichever stage counts exist for a
/// (sample, lane) unit. `None` means the stage produced no artifact for the
/// unit, which is distinct from a count of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageCounts {
    pub raw: Option<u64>,
    pub filtered: Option<u64>,
    /// Samtools reports combined forward+reverse records, so the halved
    /// per-pair count can be non-integral when one orientation is truncated.
    pub aligned: Option<f64>,
}

/// The reconciled table for a whole run: one row per (sample, lane) unit known
/// to any stage, one optional count column per stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunCountTable(BTreeMap<SampleLaneKey, StageCounts>);

impl RunCountTable {
    #[must_use]
    pub fn new(rows: BTreeMap<SampleLaneKey, StageCounts>) -> Self {
        Self(rows)
    }

    pub fn get(&self, key: &SampleLaneKey) -> Option<&StageCounts> {
        self.0.get(key)
    }

    /// Rows in key order (sorted by sample id, then lane string)
    pub fn rows(&self) -> impl Iterator<Item = (&SampleLaneKey, &StageCounts)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SampleLaneKey> {
        self.0.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
