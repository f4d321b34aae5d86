//! On-disk artifact loading
//!
//! Expected layout inside the artifacts directory:
//!
//! - `features.json` - JSON array of feature names, in model order
//! - `scaler.json` - `{"mean": [...], "scale": [...]}` exported from the
//!   fitted scaler
//! - `centroids.json` - array of equal-length centroid vectors exported from
//!   the trained clustering model
//! - `plan_catalog.csv` - `plan_id,name,price,centroid` rows

use anyhow::{Context, Result as AnyResult};
use planrec_core::{
    CentroidSet, Error, FeatureSchema, ModelArtifacts, PlanCatalog, PlanCatalogEntry, Result,
    ScalerParams, Vector,
};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::info;

pub const FEATURES_FILE: &str = "features.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const CENTROIDS_FILE: &str = "centroids.json";
pub const PLANS_FILE: &str = "plan_catalog.csv";

#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct PlanRow {
    plan_id: u32,
    name: String,
    price: f64,
    centroid: String,
}

/// Loads and validates the model artifacts from a directory
pub struct ArtifactStore;

impl ArtifactStore {
    /// Load all four artifacts and validate them as a set
    ///
    /// Any missing, corrupt, or mutually inconsistent artifact is an error;
    /// callers at the process boundary treat it as fatal.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<ModelArtifacts> {
        let dir = dir.as_ref();

        let schema = load_features(&dir.join(FEATURES_FILE))
            .map_err(|e| Error::Artifact(format!("{e:#}")))?;
        let scaler =
            load_scaler(&dir.join(SCALER_FILE)).map_err(|e| Error::Artifact(format!("{e:#}")))?;
        let centroids = load_centroids(&dir.join(CENTROIDS_FILE))
            .map_err(|e| Error::Artifact(format!("{e:#}")))?;
        let catalog =
            load_catalog(&dir.join(PLANS_FILE)).map_err(|e| Error::Artifact(format!("{e:#}")))?;

        let artifacts = ModelArtifacts::new(schema, scaler, centroids, catalog)?;
        info!(
            features = artifacts.schema().len(),
            centroids = artifacts.centroids().len(),
            plans = artifacts.catalog().len(),
            "Artifacts loaded"
        );
        Ok(artifacts)
    }
}

fn load_features(path: &Path) -> AnyResult<FeatureSchema> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let names: Vec<String> = serde_json::from_reader(file)
        .with_context(|| format!("parsing feature list {}", path.display()))?;
    if names.is_empty() {
        anyhow::bail!("feature list {} is empty", path.display());
    }
    Ok(FeatureSchema::new(names))
}

fn load_scaler(path: &Path) -> AnyResult<ScalerParams> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let raw: ScalerFile = serde_json::from_reader(file)
        .with_context(|| format!("parsing scaler parameters {}", path.display()))?;
    ScalerParams::new(raw.mean, raw.scale)
        .with_context(|| format!("validating scaler parameters {}", path.display()))
}

fn load_centroids(path: &Path) -> AnyResult<CentroidSet> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let raw: Vec<Vec<f64>> = serde_json::from_reader(file)
        .with_context(|| format!("parsing centroids {}", path.display()))?;
    CentroidSet::new(raw.into_iter().map(Vector::new).collect())
        .with_context(|| format!("validating centroids {}", path.display()))
}

fn load_catalog(path: &Path) -> AnyResult<PlanCatalog> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut entries = Vec::new();
    for (line, row) in reader.deserialize().enumerate() {
        let row: PlanRow =
            row.with_context(|| format!("parsing {} row {}", path.display(), line + 1))?;
        entries.push(PlanCatalogEntry {
            plan_id: row.plan_id,
            name: row.name,
            price: row.price,
            centroid: row.centroid,
        });
    }
    Ok(PlanCatalog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_valid_artifacts(dir: &Path) {
        fs::write(
            dir.join(FEATURES_FILE),
            r#"["Day Mins", "CustServ Calls", "Total_Usage"]"#,
        )
        .unwrap();
        fs::write(
            dir.join(SCALER_FILE),
            r#"{"mean": [180.0, 1.5, 500.0], "scale": [50.0, 1.0, 120.0]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(CENTROIDS_FILE),
            "[[-1.0, -0.5, -1.0], [0.0, 0.0, 0.0], [2.0, 1.0, 2.0]]",
        )
        .unwrap();
        fs::write(
            dir.join(PLANS_FILE),
            "plan_id,name,price,centroid\n\
             0,Basic,19.0,\"{'avg_day_mins': 130.0}\"\n\
             1,Standard,29.0,\"{\"\"avg_day_mins\"\": 180.0}\"\n\
             2,Unlimited,49.0,\"[280.0, 2.5, 740.0]\"\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_valid_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());

        let artifacts = ArtifactStore::load(dir.path()).unwrap();
        assert_eq!(artifacts.schema().len(), 3);
        assert_eq!(artifacts.centroids().len(), 3);
        assert_eq!(artifacts.catalog().len(), 3);
        assert_eq!(artifacts.catalog().get(2).unwrap().name, "Unlimited");
    }

    #[test]
    fn test_missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        fs::remove_file(dir.path().join(SCALER_FILE)).unwrap();

        let err = ArtifactStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_corrupt_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(dir.path().join(CENTROIDS_FILE), "not json").unwrap();

        let err = ArtifactStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_zero_scale_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(
            dir.path().join(SCALER_FILE),
            r#"{"mean": [180.0, 1.5, 500.0], "scale": [50.0, 0.0, 120.0]}"#,
        )
        .unwrap();

        let err = ArtifactStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_catalog_index_mismatch_fails_at_load() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(
            dir.path().join(PLANS_FILE),
            "plan_id,name,price,centroid\n\
             0,Basic,19.0,\"[0.0]\"\n\
             1,Standard,29.0,\"[0.0]\"\n\
             5,Stray,49.0,\"[0.0]\"\n",
        )
        .unwrap();

        let err = ArtifactStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_centroid_schema_dimension_mismatch_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(dir.path().join(CENTROIDS_FILE), "[[0.0, 0.0], [1.0, 1.0]]").unwrap();

        let err = ArtifactStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. } | Error::InvalidConfig(_)));
    }
}
