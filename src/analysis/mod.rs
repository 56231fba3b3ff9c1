//! Difference interpretation and reporting
//!
//! This module contains the reasoning half of the comparison pipeline:
//! - Threshold-based interpretation of feature differences
//! - The assembled comparison report

pub mod interpret;
pub mod result;
