//! Comparison result types

use serde::{Deserialize, Serialize};

use crate::analysis::interpret::Statement;
use crate::features::vector::{DifferenceVector, FeatureVector};

/// Complete result of comparing a target recording against a reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Features of the reference recording
    pub normal: FeatureVector,

    /// Features of the target recording
    pub target: FeatureVector,

    /// Element-wise target − normal difference
    pub difference: DifferenceVector,

    /// Qualitative findings, in fixed feature order; empty means no
    /// significant acoustic change was detected
    pub statements: Vec<Statement>,

    /// Comparison metadata
    pub metadata: ComparisonMetadata,
}

/// Comparison metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonMetadata {
    /// Reference recording duration in seconds
    pub normal_duration_seconds: f32,

    /// Target recording duration in seconds
    pub target_duration_seconds: f32,

    /// Sample rate in Hz (shared by both recordings)
    pub sample_rate: u32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::interpret::ChangeDirection;
    use crate::features::vector::{diff, FeatureName};

    #[test]
    fn test_report_serializes_with_readable_keys() {
        let normal = FeatureVector::new(0.25, 1000.0, 0.5);
        let target = FeatureVector::new(0.5, 1200.0, 0.75);
        let report = ComparisonReport {
            difference: diff(&normal, &target).unwrap(),
            normal,
            target,
            statements: vec![Statement {
                feature: FeatureName::Energy,
                direction: ChangeDirection::Increased,
                text: "overall energy increased".to_string(),
            }],
            metadata: ComparisonMetadata {
                normal_duration_seconds: 1.0,
                target_duration_seconds: 1.0,
                sample_rate: 44100,
                processing_time_ms: 2.5,
                algorithm_version: "0.1.0".to_string(),
            },
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"energy\""), "JSON should use wire names: {}", json);
        assert!(json.contains("\"hf_ratio\""));
        assert!(json.contains("\"increased\""));
    }
}
