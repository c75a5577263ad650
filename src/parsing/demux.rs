//! Parser for the demultiplexer's aggregate stats report.
//!
//! bcl2fastq (and bcl-convert in its compatibility layout) writes one
//! `Stats/Stats.json` per run. The counts live under
//! `ConversionResults[].DemuxResults[]`: one entry per lane, each listing the
//! samples demultiplexed on it with their read totals. This is the platform's
//! own per-sample, per-lane aggregate, so counts are taken from here directly
//! and never re-summed from individual fastq files.

use std::path::Path;

use serde::Deserialize;

use crate::core::key::SampleLaneKey;
use crate::parsing::ParseError;

#[derive(Debug, Deserialize)]
struct DemuxStats {
    #[serde(rename = "ConversionResults")]
    conversion_results: Vec<LaneConversion>,
}

#[derive(Debug, Deserialize)]
struct LaneConversion {
    #[serde(rename = "LaneNumber")]
    lane_number: u32,

    #[serde(rename = "DemuxResults", default)]
    demux_results: Vec<DemuxResult>,
}

#[derive(Debug, Deserialize)]
struct DemuxResult {
    #[serde(rename = "SampleId")]
    sample_id: String,

    #[serde(rename = "NumberReads")]
    number_reads: u64,
}

/// Parse a `Stats/Stats.json` file into per-(sample, lane) read counts
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Json` if it is not valid JSON or the expected structure is
/// absent.
pub fn parse_stats_file(path: &Path) -> Result<Vec<(SampleLaneKey, u64)>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_stats_text(&content)
}

/// Parse `Stats.json` content into per-(sample, lane) read counts
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not valid JSON or the
/// `ConversionResults`/`DemuxResults` structure is absent.
pub fn parse_stats_text(text: &str) -> Result<Vec<(SampleLaneKey, u64)>, ParseError> {
    let stats: DemuxStats = serde_json::from_str(text)?;

    let mut counts = Vec::new();
    for lane in stats.conversion_results {
        for result in lane.demux_results {
            counts.push((
                SampleLaneKey::new(result.sample_id, lane.lane_number.to_string()),
                result.number_reads,
            ));
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_stats_text() {
        let stats = r#"{
            "RunNumber": 82,
            "ConversionResults": [
                {
                    "LaneNumber": 1,
                    "DemuxResults": [
                        {"SampleId": "sample1", "NumberReads": 10000, "Yield": 1510000},
                        {"SampleId": "sample2", "NumberReads": 100000, "Yield": 15100000}
                    ]
                },
                {
                    "LaneNumber": 3,
                    "DemuxResults": [
                        {"SampleId": "sample1", "NumberReads": 100000, "Yield": 1}
                    ]
                }
            ]
        }"#;

        let counts = parse_stats_text(stats).unwrap();
        assert_eq!(
            counts,
            vec![
                (SampleLaneKey::new("sample1", "1"), 10000),
                (SampleLaneKey::new("sample2", "1"), 100000),
                (SampleLaneKey::new("sample1", "3"), 100000),
            ]
        );
    }

    #[test]
    fn test_lane_without_demux_results() {
        // Undetermined-only lanes can lack the DemuxResults key entirely
        let stats = r#"{"ConversionResults": [{"LaneNumber": 2}]}"#;
        let counts = parse_stats_text(stats).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_stats_text("not json").is_err());
    }

    #[test]
    fn test_missing_conversion_results_is_an_error() {
        assert!(parse_stats_text(r#"{"RunNumber": 82}"#).is_err());
    }
}
