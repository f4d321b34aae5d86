//! # planrec
//!
//! Telecom plan recommender: matches a customer's usage profile against
//! pre-trained cluster centroids and returns the nearest plans.
//!
//! The pipeline is vectorize → scale → rank → assemble, run entirely
//! in memory against four immutable artifacts loaded once at startup
//! (feature schema, fitted scaler, cluster centroids, plan catalog).
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! planrec --artifacts ./artifacts --input usage.json --top-k 3
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use planrec::prelude::*;
//! use std::sync::Arc;
//!
//! let artifacts = ArtifactStore::load("./artifacts").unwrap();
//! let engine = Engine::new(Arc::new(artifacts));
//!
//! let record = UsageRecord::new()
//!     .with("Day Mins", 120.0)
//!     .with("Eve Mins", 100.0)
//!     .with("Night Mins", 80.0)
//!     .with("Intl Mins", 5.0)
//!     .with("CustServ Calls", 1.0);
//!
//! let recommendations = engine.recommend_default(&record).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - `planrec-core` - Engine logic (vectorization, scaling, ranking, assembly)
//! - `planrec-artifacts` - Artifact store (disk loading and validation)

// Re-export core types
pub use planrec_core::{
    assemble, parse_description, rank, CentroidSet, Engine, Error, FeatureSchema, ModelArtifacts,
    ParsedDescription, PlanCatalog, PlanCatalogEntry, Recommendation, Result, ScalerParams,
    UsageRecord, Vector, DEFAULT_TOP_K, TOTAL_USAGE, TOTAL_USAGE_COMPONENTS,
};

// Re-export the artifact store
pub use planrec_artifacts::ArtifactStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactStore, CentroidSet, Engine, Error, FeatureSchema, ModelArtifacts, PlanCatalog,
        PlanCatalogEntry, Recommendation, Result, ScalerParams, UsageRecord, Vector,
        DEFAULT_TOP_K,
    };
}
