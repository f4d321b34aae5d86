//! Distance-based centroid ranking

use crate::{CentroidSet, Error, Result, Vector};

/// Default number of plans to recommend
pub const DEFAULT_TOP_K: usize = 3;

/// Rank all centroids by Euclidean distance to `scaled` and keep the `k`
/// closest, ascending
///
/// Ties break by ascending centroid index: the sort is stable and candidates
/// are scored in index order.
pub fn rank(scaled: &Vector, centroids: &CentroidSet, k: usize) -> Result<Vec<(usize, f64)>> {
    if centroids.is_empty() {
        return Err(Error::InvalidConfig("centroid set is empty".to_string()));
    }
    if k > centroids.len() {
        return Err(Error::InvalidInput(format!(
            "k={k} exceeds centroid count {}",
            centroids.len()
        )));
    }
    if scaled.dim() != centroids.dim() {
        return Err(Error::InvalidDimension {
            expected: centroids.dim(),
            actual: scaled.dim(),
        });
    }

    let mut scored: Vec<(usize, f64)> = centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| (index, scaled.euclidean_distance(centroid)))
        .collect();

    scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    Ok(scored)
}
