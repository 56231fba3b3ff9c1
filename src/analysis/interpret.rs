//! Threshold-based interpretation of feature differences
//!
//! Maps a difference vector into qualitative, human-readable statements.
//! The logic is a rule table, one independent (feature, threshold,
//! increase wording, decrease wording) entry per feature, evaluated in the
//! fixed feature order. Each rule only fires when the absolute difference
//! strictly exceeds its threshold, so an empty result is the normal outcome
//! for two recordings of a healthy machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CompareConfig;
use crate::error::AnalysisError;
use crate::features::vector::{DifferenceVector, FeatureName};

/// Direction of a reported feature change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    /// Target value is above the reference
    Increased,
    /// Target value is below the reference
    Decreased,
}

/// One qualitative finding about the target recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Feature the finding refers to
    pub feature: FeatureName,
    /// Direction of the change
    pub direction: ChangeDirection,
    /// Human-readable description of the finding
    pub text: String,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One row of the interpretation rule table
struct Rule {
    feature: FeatureName,
    threshold: f32,
    on_increase: &'static str,
    on_decrease: &'static str,
}

/// Rule table in evaluation order
///
/// Rules are independent of each other: adding a feature means adding a row,
/// not rewriting a conditional chain.
fn rule_table(config: &CompareConfig) -> [Rule; 3] {
    [
        Rule {
            feature: FeatureName::Energy,
            threshold: config.energy_threshold,
            on_increase: "overall energy increased, suggesting higher load, friction, or noise level",
            on_decrease: "overall energy decreased, suggesting reduced load or a weaker source",
        },
        Rule {
            feature: FeatureName::Centroid,
            threshold: config.centroid_threshold_hz,
            on_increase: "spectral centroid shifted upward, indicating a brighter or more metallic tone",
            on_decrease: "spectral centroid shifted downward, indicating a duller, bass-heavier tone",
        },
        Rule {
            feature: FeatureName::HfRatio,
            threshold: config.hf_ratio_threshold,
            on_increase: "high-frequency content increased relative to low frequencies, an early sign of wear or rattle",
            on_decrease: "high-frequency content decreased relative to low frequencies",
        },
    ]
}

/// Interpret a difference vector as an ordered list of statements
///
/// Pure, stateless, and total for well-formed input: the same difference
/// vector always yields the same statements, in the fixed feature order. An
/// empty result means no feature moved beyond its threshold: a valid,
/// meaningful outcome ("no significant acoustic change"), not an error.
///
/// # Errors
///
/// Returns [`AnalysisError::SchemaMismatch`] if the difference vector lacks
/// one of the known features, a malformed input inherited from upstream,
/// since the differencer guarantees the full schema.
pub fn interpret(
    difference: &DifferenceVector,
    config: &CompareConfig,
) -> Result<Vec<Statement>, AnalysisError> {
    let mut statements = Vec::new();

    for rule in rule_table(config) {
        let value = difference.get(rule.feature).ok_or_else(|| {
            AnalysisError::SchemaMismatch(format!(
                "Difference vector is missing `{}`",
                rule.feature
            ))
        })?;

        if value.abs() <= rule.threshold {
            continue;
        }

        let (direction, text) = if value > 0.0 {
            (ChangeDirection::Increased, rule.on_increase)
        } else {
            (ChangeDirection::Decreased, rule.on_decrease)
        };

        statements.push(Statement {
            feature: rule.feature,
            direction,
            text: text.to_string(),
        });
    }

    log::debug!(
        "Interpretation produced {} statement(s)",
        statements.len()
    );

    Ok(statements)
}
