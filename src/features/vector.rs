//! Feature vector schema and differencing
//!
//! A [`FeatureVector`] maps a fixed, closed set of feature names to scalar
//! values. The extractor always emits the full three-entry schema; the
//! differencer re-checks the schema anyway, because the two vectors it
//! receives are computed independently and version skew between extractors
//! is a programming error worth surfacing immediately.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Closed set of recognized acoustic features
///
/// The declaration order is the fixed evaluation order used everywhere a
/// vector is iterated or interpreted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    /// Root-mean-square amplitude over the whole waveform
    Energy,
    /// Magnitude-weighted mean frequency of the short-time spectrum, in Hz
    Centroid,
    /// High-band to low-band mean magnitude ratio, dimensionless
    HfRatio,
}

impl FeatureName {
    /// All feature names in evaluation order
    pub const ALL: [FeatureName; 3] = [
        FeatureName::Energy,
        FeatureName::Centroid,
        FeatureName::HfRatio,
    ];

    /// Wire/report name of the feature
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureName::Energy => "energy",
            FeatureName::Centroid => "centroid",
            FeatureName::HfRatio => "hf_ratio",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-schema set of scalar acoustic descriptors
///
/// Created once per waveform by the extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: BTreeMap<FeatureName, f32>,
}

impl FeatureVector {
    /// Build the full three-entry schema
    pub fn new(energy: f32, centroid: f32, hf_ratio: f32) -> Self {
        let mut values = BTreeMap::new();
        values.insert(FeatureName::Energy, energy);
        values.insert(FeatureName::Centroid, centroid);
        values.insert(FeatureName::HfRatio, hf_ratio);
        Self { values }
    }

    /// Value of one feature, if present
    pub fn get(&self, name: FeatureName) -> Option<f32> {
        self.values.get(&name).copied()
    }

    /// Iterate entries in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f32)> + '_ {
        self.values.iter().map(|(&name, &value)| (name, value))
    }

    fn keys(&self) -> Vec<FeatureName> {
        self.values.keys().copied().collect()
    }
}

impl FromIterator<(FeatureName, f32)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (FeatureName, f32)>>(entries: I) -> Self {
        Self {
            values: entries.into_iter().collect(),
        }
    }
}

/// Element-wise difference between two feature vectors (target − normal)
///
/// Shares the schema of its inputs; entries are signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceVector {
    values: BTreeMap<FeatureName, f32>,
}

impl DifferenceVector {
    /// Value of one feature difference, if present
    pub fn get(&self, name: FeatureName) -> Option<f32> {
        self.values.get(&name).copied()
    }

    /// Iterate entries in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f32)> + '_ {
        self.values.iter().map(|(&name, &value)| (name, value))
    }
}

impl FromIterator<(FeatureName, f32)> for DifferenceVector {
    fn from_iter<I: IntoIterator<Item = (FeatureName, f32)>>(entries: I) -> Self {
        Self {
            values: entries.into_iter().collect(),
        }
    }
}

/// Subtract two feature vectors of identical schema
///
/// Each entry of the result is `target[k] − normal[k]`.
///
/// # Errors
///
/// Returns [`AnalysisError::SchemaMismatch`] if the key sets differ. No
/// other validation is performed; values may carry either sign and any
/// magnitude.
pub fn diff(
    normal: &FeatureVector,
    target: &FeatureVector,
) -> Result<DifferenceVector, AnalysisError> {
    let normal_keys = normal.keys();
    let target_keys = target.keys();

    if normal_keys != target_keys {
        return Err(AnalysisError::SchemaMismatch(format!(
            "Feature key sets differ: normal has {:?}, target has {:?}",
            normal_keys, target_keys
        )));
    }

    Ok(normal
        .iter()
        .map(|(name, normal_value)| {
            // Key set equality was checked above
            let target_value = target.get(name).unwrap_or(normal_value);
            (name, target_value - normal_value)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_is_target_minus_normal() {
        let normal = FeatureVector::new(0.25, 1000.0, 0.5);
        let target = FeatureVector::new(0.75, 800.0, 0.875);

        let difference = diff(&normal, &target).unwrap();

        assert_eq!(difference.get(FeatureName::Energy), Some(0.5));
        assert_eq!(difference.get(FeatureName::Centroid), Some(-200.0));
        assert_eq!(difference.get(FeatureName::HfRatio), Some(0.375));
    }

    #[test]
    fn test_diff_with_self_is_zero() {
        let vector = FeatureVector::new(0.25, 1234.5, 0.75);
        let difference = diff(&vector, &vector).unwrap();

        for (name, value) in difference.iter() {
            assert_eq!(value, 0.0, "diff(A, A)[{}] should be exactly zero", name);
        }
    }

    #[test]
    fn test_diff_preserves_schema() {
        let normal = FeatureVector::new(0.1, 500.0, 0.2);
        let target = FeatureVector::new(0.2, 600.0, 0.3);

        let difference = diff(&normal, &target).unwrap();
        let keys: Vec<FeatureName> = difference.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, FeatureName::ALL.to_vec());
    }

    #[test]
    fn test_diff_rejects_missing_key() {
        let full = FeatureVector::new(0.1, 500.0, 0.2);
        let partial: FeatureVector = [
            (FeatureName::Energy, 0.1),
            (FeatureName::HfRatio, 0.2),
        ]
        .into_iter()
        .collect();

        let result = diff(&full, &partial);
        assert!(
            matches!(result, Err(AnalysisError::SchemaMismatch(_))),
            "A vector missing `centroid` should fail with SchemaMismatch"
        );
    }

    #[test]
    fn test_iteration_follows_evaluation_order() {
        let vector = FeatureVector::new(1.0, 2.0, 3.0);
        let names: Vec<FeatureName> = vector.iter().map(|(name, _)| name).collect();
        assert_eq!(names, FeatureName::ALL.to_vec());
    }
}
