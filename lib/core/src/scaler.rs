//! Per-feature affine normalization
//!
//! Applies the fitted scaler exported from training: subtract the per-feature
//! mean, divide by the per-feature scale. Parameters are validated once at
//! construction; `transform` only re-checks the vector length.

use crate::{Error, Result, Vector};

/// Fitted scaler parameters, parallel to the feature schema
#[derive(Debug, Clone, PartialEq)]
pub struct ScalerParams {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl ScalerParams {
    /// Construct from parallel mean/scale arrays
    ///
    /// Rejects length mismatches and zero scales; a zero scale is a broken
    /// artifact, not something to divide by later.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.len() != scale.len() {
            return Err(Error::InvalidConfig(format!(
                "scaler mean/scale length mismatch: {} vs {}",
                mean.len(),
                scale.len()
            )));
        }
        if let Some(pos) = scale.iter().position(|s| *s == 0.0) {
            return Err(Error::InvalidConfig(format!(
                "scaler has zero scale at feature index {pos}"
            )));
        }
        Ok(Self { mean, scale })
    }

    /// Identity scaler (mean 0, scale 1) of the given dimension
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        Self {
            mean: vec![0.0; dim],
            scale: vec![1.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Apply `(v[i] - mean[i]) / scale[i]` element-wise
    pub fn transform(&self, vector: &Vector) -> Result<Vector> {
        if vector.dim() != self.len() {
            return Err(Error::InvalidDimension {
                expected: self.len(),
                actual: vector.dim(),
            });
        }

        let scaled = vector
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(v, (m, s))| (v - m) / s)
            .collect();
        Ok(Vector::new(scaled))
    }
}
