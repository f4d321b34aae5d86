//! # planrec Core
//!
//! Core engine for the planrec telecom plan recommender.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`FeatureSchema`] / [`UsageRecord`] - Ordered feature vectorization with
//!   the derived `Total_Usage` feature
//! - [`ScalerParams`] - Per-feature affine normalization
//! - [`CentroidSet`] / [`rank`] - Euclidean top-K ranking against cluster
//!   centroids
//! - [`PlanCatalog`] - Catalog rows joined to clusters by `plan_id`
//! - [`Engine`] - Façade composing the full pipeline over immutable artifacts
//!
//! ## Example
//!
//! ```rust
//! use planrec_core::{
//!     CentroidSet, Engine, FeatureSchema, ModelArtifacts, PlanCatalog, PlanCatalogEntry,
//!     ScalerParams, UsageRecord, Vector,
//! };
//! use std::sync::Arc;
//!
//! let schema = FeatureSchema::new(vec!["Day Mins".to_string(), "CustServ Calls".to_string()]);
//! let scaler = ScalerParams::identity(2);
//! let centroids = CentroidSet::new(vec![
//!     Vector::new(vec![100.0, 1.0]),
//!     Vector::new(vec![400.0, 3.0]),
//! ])
//! .unwrap();
//! let catalog = PlanCatalog::new(vec![
//!     PlanCatalogEntry {
//!         plan_id: 0,
//!         name: "Basic".to_string(),
//!         price: 19.0,
//!         centroid: "[100.0, 1.0]".to_string(),
//!     },
//!     PlanCatalogEntry {
//!         plan_id: 1,
//!         name: "Unlimited".to_string(),
//!         price: 49.0,
//!         centroid: "[400.0, 3.0]".to_string(),
//!     },
//! ]);
//!
//! let artifacts = ModelArtifacts::new(schema, scaler, centroids, catalog).unwrap();
//! let engine = Engine::new(Arc::new(artifacts));
//!
//! let record = UsageRecord::new().with("Day Mins", 120.0).with("CustServ Calls", 1.0);
//! let recs = engine.recommend(&record, 1).unwrap();
//! assert_eq!(recs[0].name, "Basic");
//! ```

pub mod catalog;
pub mod centroids;
pub mod describe;
pub mod engine;
pub mod error;
pub mod rank;
pub mod recommend;
pub mod scaler;
pub mod schema;
pub mod vector;

pub use catalog::{PlanCatalog, PlanCatalogEntry};
pub use centroids::CentroidSet;
pub use describe::{parse_description, ParsedDescription};
pub use engine::{Engine, ModelArtifacts};
pub use error::{Error, Result};
pub use rank::{rank, DEFAULT_TOP_K};
pub use recommend::{assemble, Recommendation};
pub use scaler::ScalerParams;
pub use schema::{FeatureSchema, UsageRecord, TOTAL_USAGE, TOTAL_USAGE_COMPONENTS};
pub use vector::Vector;
