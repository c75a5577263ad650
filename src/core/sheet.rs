use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// One row of the sample sheet: a sample expected on a given lane, with its
/// artifacts living under the named project subdirectory of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSheetEntry {
    pub sample_id: String,
    pub project: String,
    /// Lane number, decimal string with no leading zeros
    pub lane: String,
}

impl SampleSheetEntry {
    pub fn new(
        sample_id: impl Into<String>,
        project: impl Into<String>,
        lane: impl Into<String>,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            project: project.into(),
            lane: lane.into(),
        }
    }
}

/// The sample-sheet collaborator's view of a run: which (sample, project,
/// lane) combinations are expected and where each sample's artifacts live.
///
/// The sample-sheet file format itself is owned by the surrounding pipeline;
/// callers construct this from whatever model they already have and pass it
/// explicitly into each collector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSheet {
    entries: Vec<SampleSheetEntry>,
}

impl SampleSheet {
    #[must_use]
    pub fn new(entries: Vec<SampleSheetEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SampleSheetEntry] {
        &self.entries
    }

    /// Distinct (project, lane) combinations, in sorted order so scans are
    /// independent of sheet row order.
    pub fn project_lanes(&self) -> BTreeSet<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.project.as_str(), e.lane.as_str()))
            .collect()
    }

    /// The set of sample ids the sheet expects for this run.
    pub fn expected_samples(&self) -> HashSet<&str> {
        self.entries.iter().map(|e| e.sample_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SampleSheet {
        SampleSheet::new(vec![
            SampleSheetEntry::new("sample2", "Baz", "3"),
            SampleSheetEntry::new("sample1", "Baz", "1"),
            SampleSheetEntry::new("sample2", "Baz", "1"),
            SampleSheetEntry::new("sample1", "Baz", "3"),
            SampleSheetEntry::new("sample3", "Trojecp_666", "3"),
        ])
    }

    #[test]
    fn test_project_lanes_deduplicated_and_sorted() {
        let sheet = sheet();
        let lanes: Vec<_> = sheet.project_lanes().into_iter().collect();
        assert_eq!(lanes, vec![("Baz", "1"), ("Baz", "3"), ("Trojecp_666", "3")]);
    }

    #[test]
    fn test_expected_samples() {
        let sheet = sheet();
        let expected = sheet.expected_samples();
        assert_eq!(expected.len(), 3);
        assert!(expected.contains("sample1"));
        assert!(expected.contains("sample3"));
    }
}
