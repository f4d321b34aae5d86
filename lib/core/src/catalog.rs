//! Plan catalog
//!
//! Catalog rows are keyed by `plan_id`, and the cross-artifact contract is
//! `plan_id == cluster index`. The contract is checked at artifact-load time
//! so a mismatch fails startup instead of surfacing mid-request.

use crate::{CentroidSet, Error, Result};
use serde::{Deserialize, Serialize};

/// One row of the plan catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanCatalogEntry {
    pub plan_id: u32,
    pub name: String,
    pub price: f64,
    /// Centroid description as stored: JSON or a Python-style literal
    pub centroid: String,
}

/// Immutable catalog of service plans, ordered by `plan_id`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanCatalog {
    entries: Vec<PlanCatalogEntry>,
}

impl PlanCatalog {
    #[must_use]
    pub fn new(mut entries: Vec<PlanCatalogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.plan_id);
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry whose `plan_id` equals the given cluster index
    #[must_use]
    pub fn get(&self, plan_id: u32) -> Option<&PlanCatalogEntry> {
        self.entries
            .binary_search_by_key(&plan_id, |entry| entry.plan_id)
            .ok()
            .map(|pos| &self.entries[pos])
    }

    /// All entries, ascending by `plan_id`
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[PlanCatalogEntry] {
        &self.entries
    }

    /// Check the `plan_id == cluster index` contract against a centroid set
    ///
    /// Plan ids must be exactly `0..centroids.len()`, and prices must be
    /// non-negative.
    pub fn validate_against(&self, centroids: &CentroidSet) -> Result<()> {
        if self.entries.len() != centroids.len() {
            return Err(Error::InvalidConfig(format!(
                "catalog has {} plans but there are {} centroids",
                self.entries.len(),
                centroids.len()
            )));
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.plan_id as usize != index {
                return Err(Error::InvalidConfig(format!(
                    "catalog plan ids are not the cluster indices 0..{}: found plan_id {} at position {index}",
                    centroids.len(),
                    entry.plan_id
                )));
            }
            if entry.price < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "plan {} has negative price {}",
                    entry.plan_id, entry.price
                )));
            }
        }
        Ok(())
    }
}
