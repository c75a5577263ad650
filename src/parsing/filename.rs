//! Identity extraction from Illumina-convention artifact filenames.
//!
//! Demultiplexed read files, and the per-stage logs named after them, follow
//! the `<sample>_S<cell>_L<lane>_<read>_001<ext>` convention, e.g.
//! `33333_G2750L_S2031_L001_R1_001.fastq.gz`. The sample token itself may
//! legally contain underscores, digits, and even substrings that look like
//! the `_S.._L.._R1` machinery, so the grammar is anchored to the end of the
//! name and the rightmost occurrence of the identity suffix wins; everything
//! before it is the sample name, verbatim.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::core::key::SampleLaneKey;

lazy_static! {
    // Greedy leading group pushes the identity suffix to its rightmost,
    // trailing occurrence.
    static ref ARTIFACT_NAME_REGEX: Regex =
        Regex::new(r"^(.*)_S(\d+)_L(\d+)_(R1|R2|I1)_001(\..+)?$").unwrap();
}

/// A filename does not follow the expected naming convention
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized artifact filename: {name}")]
pub struct FormatError {
    pub name: String,
}

/// The identity suffix fields of an artifact filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    pub key: SampleLaneKey,
    /// Cell number assigned by the demultiplexer (the `S` field)
    pub cell: u32,
    /// Read orientation: `R1`, `R2`, or `I1`
    pub read: String,
}

/// Parse an artifact filename into its (sample, lane) key and read fields.
///
/// The lane is returned with leading zeros stripped (`L001` -> `"1"`,
/// `L010` -> `"10"`).
///
/// # Errors
///
/// Returns [`FormatError`] when the name carries no trailing
/// `_S<digits>_L<digits>_<read>_001<ext>` suffix.
pub fn parse_artifact_name(name: &str) -> Result<ArtifactName, FormatError> {
    let cap = ARTIFACT_NAME_REGEX
        .captures(name)
        .ok_or_else(|| FormatError {
            name: name.to_string(),
        })?;

    let sample = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
    if sample.is_empty() {
        return Err(FormatError {
            name: name.to_string(),
        });
    }

    // Digit runs are guaranteed by the pattern
    let cell: u32 = cap[2].parse().map_err(|_| FormatError {
        name: name.to_string(),
    })?;
    let lane: u32 = cap[3].parse().map_err(|_| FormatError {
        name: name.to_string(),
    })?;

    Ok(ArtifactName {
        key: SampleLaneKey::new(sample, lane.to_string()),
        cell,
        read: cap[4].to_string(),
    })
}

/// Convenience wrapper returning only the (sample, lane) key
///
/// # Errors
///
/// Returns [`FormatError`] when the name does not match the convention.
pub fn extract_name_and_lane(name: &str) -> Result<SampleLaneKey, FormatError> {
    parse_artifact_name(name).map(|a| a.key)
}
