//! Engine façade
//!
//! Composes vectorize → transform → rank → assemble over the process-wide
//! artifacts. Artifacts are validated once at construction and never mutated
//! afterwards, so the engine is freely shareable across threads.

use crate::recommend::{assemble, Recommendation};
use crate::{
    rank, CentroidSet, FeatureSchema, PlanCatalog, Result, ScalerParams, UsageRecord,
    DEFAULT_TOP_K,
};
use std::sync::Arc;

/// The four immutable model artifacts, validated as a consistent set
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    schema: FeatureSchema,
    scaler: ScalerParams,
    centroids: CentroidSet,
    catalog: PlanCatalog,
}

impl ModelArtifacts {
    /// Bundle the artifacts, enforcing the cross-artifact contracts
    ///
    /// Checks: scaler length == schema length == centroid dimensionality,
    /// non-empty centroid set, and catalog plan ids exactly matching cluster
    /// indices.
    pub fn new(
        schema: FeatureSchema,
        scaler: ScalerParams,
        centroids: CentroidSet,
        catalog: PlanCatalog,
    ) -> Result<Self> {
        if scaler.len() != schema.len() {
            return Err(crate::Error::InvalidDimension {
                expected: schema.len(),
                actual: scaler.len(),
            });
        }
        if centroids.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "centroid set is empty".to_string(),
            ));
        }
        if centroids.dim() != schema.len() {
            return Err(crate::Error::InvalidDimension {
                expected: schema.len(),
                actual: centroids.dim(),
            });
        }
        catalog.validate_against(&centroids)?;

        Ok(Self {
            schema,
            scaler,
            centroids,
            catalog,
        })
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[inline]
    #[must_use]
    pub fn scaler(&self) -> &ScalerParams {
        &self.scaler
    }

    #[inline]
    #[must_use]
    pub fn centroids(&self) -> &CentroidSet {
        &self.centroids
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }
}

/// Recommendation engine over shared, read-only artifacts
#[derive(Clone)]
pub struct Engine {
    artifacts: Arc<ModelArtifacts>,
}

impl Engine {
    #[must_use]
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    #[inline]
    #[must_use]
    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    /// Recommend the `k` plans whose centroids are nearest the usage record
    pub fn recommend(&self, record: &UsageRecord, k: usize) -> Result<Vec<Recommendation>> {
        let vector = self.artifacts.schema.vectorize(record)?;
        let scaled = self.artifacts.scaler.transform(&vector)?;
        let ranked = rank(&scaled, &self.artifacts.centroids, k)?;
        assemble(&ranked, &self.artifacts.catalog)
    }

    /// Recommend with the default top-K of 3
    pub fn recommend_default(&self, record: &UsageRecord) -> Result<Vec<Recommendation>> {
        self.recommend(record, DEFAULT_TOP_K)
    }
}
