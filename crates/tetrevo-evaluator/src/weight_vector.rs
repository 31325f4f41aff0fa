//! The linear evaluation weights ("brain") applied to board features.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::board_features::FeatureVector;

/// Raised when constructing a [`WeightVector`] from a slice of the wrong
/// length.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("expected {expected} weights, got {actual}")]
pub struct WeightVectorLengthError {
    pub expected: usize,
    pub actual: usize,
}

/// One weight per feature, in the feature order of
/// [`FeatureVector::to_array`].
///
/// A placement's score is the dot product of this vector with the extracted
/// features; higher is better. The vector is a plain value: drivers copy it
/// in, the trainer breeds populations of them, and there is no module-level
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector([f32; FeatureVector::LEN]);

impl WeightVector {
    /// Number of weights (9), one per feature.
    pub const LEN: usize = FeatureVector::LEN;

    #[must_use]
    pub const fn new(weights: [f32; Self::LEN]) -> Self {
        Self(weights)
    }

    /// Fails fast when the slice is not exactly [`Self::LEN`] long.
    pub fn from_slice(weights: &[f32]) -> Result<Self, WeightVectorLengthError> {
        let weights = weights
            .try_into()
            .map_err(|_| WeightVectorLengthError {
                expected: Self::LEN,
                actual: weights.len(),
            })?;
        Ok(Self(weights))
    }

    /// Weighted sum of the features. Higher is better; ties are the search's
    /// problem, not the evaluator's.
    #[must_use]
    pub fn score(&self, features: &FeatureVector) -> f32 {
        iter::zip(self.0, features.to_array())
            .map(|(weight, feature)| weight * feature)
            .sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = WeightVector::from_slice(&[1.0; 8]).unwrap_err();
        assert_eq!(err.expected, 9);
        assert_eq!(err.actual, 8);
        assert!(WeightVector::from_slice(&[1.0; 10]).is_err());
        assert!(WeightVector::from_slice(&[1.0; 9]).is_ok());
    }

    #[test]
    fn test_score_is_a_dot_product() {
        let weights = WeightVector::new([1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
        let features = FeatureVector {
            cleared_lines: 3.0,
            total_height: 5.0,
            pits: 100.0,
            bumpiness: 100.0,
            holes: 100.0,
            hole_columns: 100.0,
            row_transitions: 100.0,
            column_transitions: 100.0,
            deepest_well: 4.0,
        };
        assert_eq!(weights.score(&features), 3.0 - 5.0 + 8.0);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let weights = WeightVector::new([0.0; WeightVector::LEN]);
        let features = FeatureVector::extract(&tetrevo_engine::Board::INITIAL, 0);
        assert_eq!(weights.score(&features), 0.0);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let weights = WeightVector::new([1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);
        let json = serde_json::to_string(&weights).unwrap();
        assert_eq!(json, "[1.0,-1.0,-1.0,-1.0,-1.0,-1.0,-1.0,-1.0,-1.0]");
        let parsed: WeightVector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, weights);
    }
}
