use serde::{Deserialize, Serialize};

/// Identity of one (sample, sequencing-lane) unit of work.
///
/// Every artifact a pipeline stage emits for a given sample on a given lane
/// must resolve to the same key, regardless of which stage produced it or how
/// the lane number was zero-padded in the artifact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SampleLaneKey {
    /// Sample identifier as it appears in the sample sheet
    pub sample_id: String,

    /// Lane number as a decimal string with no leading zeros
    pub lane: String,
}

impl SampleLaneKey {
    pub fn new(sample_id: impl Into<String>, lane: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            lane: lane.into(),
        }
    }
}

impl std::fmt::Display for SampleLaneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/L{}", self.sample_id, self.lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality() {
        let a = SampleLaneKey::new("sample1", "1");
        let b = SampleLaneKey::new("sample1", "1");
        let c = SampleLaneKey::new("sample1", "10");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_ordering_is_tuple_ordering() {
        let mut keys = vec![
            SampleLaneKey::new("sample2", "1"),
            SampleLaneKey::new("sample1", "3"),
            SampleLaneKey::new("sample1", "1"),
        ];
        keys.sort();

        assert_eq!(keys[0], SampleLaneKey::new("sample1", "1"));
        assert_eq!(keys[1], SampleLaneKey::new("sample1", "3"));
        assert_eq!(keys[2], SampleLaneKey::new("sample2", "1"));
    }

    #[test]
    fn test_display() {
        let key = SampleLaneKey::new("33333_G2750L", "1");
        assert_eq!(key.to_string(), "33333_G2750L/L1");
    }
}
