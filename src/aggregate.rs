//! Merging per-stage tables into the reconciled run table.
//!
//! The merge is a pure full outer join on (sample, lane): every unit known to
//! any stage gets a row, stages without a value for it get the missing
//! marker, and no unit is invented or dropped. [`run_counts`] wraps the three
//! collectors plus the join into the one-call entry point.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::collect::{self, CollectError, UnitFailure};
use crate::core::key::SampleLaneKey;
use crate::core::sheet::SampleSheet;
use crate::core::table::{RunCountTable, StageCountTable, StageCounts};

/// Full outer join of the three stage tables on (sample, lane).
///
/// The output key set is exactly the union of the input key sets; a stage
/// with no value for a unit contributes `None`, never zero.
#[must_use]
pub fn outer_join(
    raw: &StageCountTable<u64>,
    filtered: &StageCountTable<u64>,
    aligned: &StageCountTable<f64>,
) -> RunCountTable {
    let keys: BTreeSet<&SampleLaneKey> = raw
        .keys()
        .chain(filtered.keys())
        .chain(aligned.keys())
        .collect();

    let mut rows = BTreeMap::new();
    for key in keys {
        rows.insert(
            key.clone(),
            StageCounts {
                raw: raw.get(key).copied(),
                filtered: filtered.get(key).copied(),
                aligned: aligned.get(key).copied(),
            },
        );
    }

    RunCountTable::new(rows)
}

/// The reconciled table for a run plus every per-unit failure the stage
/// collectors isolated along the way
#[derive(Debug)]
pub struct RunReport {
    pub table: RunCountTable,
    pub failures: Vec<UnitFailure>,
}

/// Collect all three stages for a run and join them into one table.
///
/// The collectors are independent of one another and run over a static file
/// set, so repeated calls over an unchanged run directory yield identical
/// tables.
///
/// # Errors
///
/// Returns the first stage-level [`CollectError`] encountered (unreadable
/// project directory, missing demultiplexer report, ambiguous duplicate
/// unit). Failures confined to a single unit's artifact are returned in the
/// report instead.
pub fn run_counts(run_dir: &Path, sheet: &SampleSheet) -> Result<RunReport, CollectError> {
    let raw = collect::raw::collect(run_dir, sheet)?;
    let filtered = collect::filtered::collect(run_dir, sheet)?;
    let aligned = collect::aligned::collect(run_dir, sheet)?;

    let table = outer_join(&raw.counts, &filtered.counts, &aligned.counts);

    let mut failures = raw.failures;
    failures.extend(filtered.failures);
    failures.extend(aligned.failures);

    Ok(RunReport { table, failures })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(sample: &str, lane: &str) -> SampleLaneKey {
        SampleLaneKey::new(sample, lane)
    }

    #[test]
    fn test_outer_join_keeps_union_of_keys() {
        // raw has {A, B}, aligned has {B, C}
        let mut raw = StageCountTable::new();
        raw.insert(key("a", "1"), 10);
        raw.insert(key("b", "1"), 20);

        let filtered = StageCountTable::new();

        let mut aligned = StageCountTable::new();
        aligned.insert(key("b", "1"), 15.0);
        aligned.insert(key("c", "1"), 30.0);

        let table = outer_join(&raw, &filtered, &aligned);

        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec![key("a", "1"), key("b", "1"), key("c", "1")]);

        let a = table.get(&key("a", "1")).unwrap();
        assert_eq!(a.raw, Some(10));
        assert_eq!(a.aligned, None);

        let b = table.get(&key("b", "1")).unwrap();
        assert_eq!(b.raw, Some(20));
        assert_eq!(b.aligned, Some(15.0));

        let c = table.get(&key("c", "1")).unwrap();
        assert_eq!(c.raw, None);
        assert_eq!(c.aligned, Some(30.0));
    }

    #[test]
    fn test_outer_join_preserves_zero_counts() {
        let mut raw = StageCountTable::new();
        raw.insert(key("a", "1"), 0);

        let table = outer_join(&raw, &StageCountTable::new(), &StageCountTable::new());

        let row = table.get(&key("a", "1")).unwrap();
        // Zero is a value; the other stages are missing
        assert_eq!(row.raw, Some(0));
        assert_eq!(row.filtered, None);
        assert_eq!(row.aligned, None);
    }

    #[test]
    fn test_outer_join_of_empty_tables_is_empty() {
        let table = outer_join(
            &StageCountTable::new(),
            &StageCountTable::new(),
            &StageCountTable::new(),
        );
        assert!(table.is_empty());
    }
}
