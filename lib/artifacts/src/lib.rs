//! Artifact store for planrec
//!
//! Loads the four immutable model artifacts from an artifacts directory,
//! validates them as a consistent set, and hands back the `ModelArtifacts`
//! the engine runs against. Loading is a one-time startup step; any failure
//! here must abort startup rather than let the process serve partial state.

pub mod store;

pub use store::{ArtifactStore, CENTROIDS_FILE, FEATURES_FILE, PLANS_FILE, SCALER_FILE};
