//! Shared artifact discovery for the log-driven stages.
//!
//! The filtered and aligned stages both leave one log per read file, named
//! after the read file itself, under a fixed subdirectory of each project
//! (`<run>/<project>/<subdir>/`). The scan walks those subdirectories for the
//! lanes the sample sheet expects, keeps the forward read's log as the single
//! representative per unit, and parses each one independently so a bad file
//! cannot take down the rest of the stage.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::collect::{CollectError, StageReport, UnitFailure};
use crate::core::key::SampleLaneKey;
use crate::core::sheet::SampleSheet;
use crate::core::table::{Stage, StageCountTable};
use crate::parsing::filename::extract_name_and_lane;
use crate::parsing::ParseError;

/// Discover this stage's artifacts, identify each one, and parse its count.
///
/// Units the sheet expects but that have no artifact are left out of the
/// table and reported with a single warning. Artifacts whose sample is not on
/// the sheet (stray files from an unrelated demultiplexing run) are ignored.
pub(crate) fn collect_stage_counts<V, F>(
    run_dir: &Path,
    sheet: &SampleSheet,
    stage: Stage,
    subdir: &str,
    suffix: &str,
    parse: F,
) -> Result<StageReport<V>, CollectError>
where
    F: Fn(&Path) -> Result<V, ParseError>,
{
    let mut failures = Vec::new();
    let located = locate_artifacts(run_dir, sheet, stage, subdir, suffix, &mut failures)?;

    warn_missing_units(sheet, stage, &located);

    let mut counts = StageCountTable::new();
    for (key, path) in located {
        if counts.contains_key(&key) {
            return Err(CollectError::DuplicateUnit {
                stage,
                sample: key.sample_id,
                lane: key.lane,
            });
        }
        match parse(&path) {
            Ok(count) => {
                counts.insert(key, count);
            }
            Err(error) => failures.push(UnitFailure {
                stage,
                path,
                error: error.into(),
            }),
        }
    }

    Ok(StageReport { counts, failures })
}

/// Walk each expected project/lane subdirectory and pair every representative
/// artifact with its (sample, lane) key. Entries are sorted so the result does
/// not depend on filesystem iteration order.
fn locate_artifacts(
    run_dir: &Path,
    sheet: &SampleSheet,
    stage: Stage,
    subdir: &str,
    suffix: &str,
    failures: &mut Vec<UnitFailure>,
) -> Result<Vec<(SampleLaneKey, PathBuf)>, CollectError> {
    let expected = sheet.expected_samples();
    let mut located = Vec::new();

    for (project, lane) in sheet.project_lanes() {
        let dir = run_dir.join(project).join(subdir);
        if !dir.is_dir() {
            // No artifacts for this project and stage; absence, not an error
            continue;
        }

        // Logs are named after the read files they describe. The forward
        // read is the authoritative representative for the unit's count, so
        // only `*_L<lane>_R1_001<suffix>` is matched; lanes are zero-padded
        // to three digits in artifact names.
        let tail = format!("_L{lane:0>3}_R1_001{suffix}");

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        debug!(dir = %dir.display(), lane, "scanning for {} artifacts", stage);

        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(&tail) {
                continue;
            }

            match extract_name_and_lane(name) {
                Ok(key) if expected.contains(key.sample_id.as_str()) => {
                    located.push((key, path));
                }
                Ok(key) => {
                    debug!(
                        sample = %key.sample_id,
                        path = %path.display(),
                        "ignoring {} artifact for sample not on the sample sheet",
                        stage
                    );
                }
                Err(error) => failures.push(UnitFailure {
                    stage,
                    path,
                    error: error.into(),
                }),
            }
        }
    }

    Ok(located)
}

fn warn_missing_units(sheet: &SampleSheet, stage: Stage, located: &[(SampleLaneKey, PathBuf)]) {
    let found: HashSet<&str> = located.iter().map(|(k, _)| k.sample_id.as_str()).collect();
    let mut missing: Vec<&str> = sheet
        .expected_samples()
        .into_iter()
        .filter(|s| !found.contains(s))
        .collect();

    if !missing.is_empty() {
        missing.sort_unstable();
        warn!(
            "no {} artifacts found for these samples: {}",
            stage,
            missing.join(", ")
        );
    }
}
