//! Cluster centroids
//!
//! A centroid's position in the set is its cluster index; that index is the
//! join key into the plan catalog.

use crate::{Error, Result, Vector};

/// Ordered, immutable set of cluster centroids
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CentroidSet {
    centroids: Vec<Vector>,
}

impl CentroidSet {
    /// Construct from centroid vectors, rejecting mixed dimensionality
    pub fn new(centroids: Vec<Vector>) -> Result<Self> {
        if let Some(first) = centroids.first() {
            let dim = first.dim();
            for (index, centroid) in centroids.iter().enumerate() {
                if centroid.dim() != dim {
                    return Err(Error::InvalidConfig(format!(
                        "centroid {index} has dimension {}, expected {dim}",
                        centroid.dim()
                    )));
                }
            }
        }
        Ok(Self { centroids })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Dimensionality of the centroids (0 for an empty set)
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.centroids.first().map_or(0, Vector::dim)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Vector> {
        self.centroids.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.centroids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_dimensionality_enforced() {
        let err = CentroidSet::new(vec![
            Vector::new(vec![0.0, 0.0]),
            Vector::new(vec![1.0, 2.0, 3.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_dim_and_len() {
        let set = CentroidSet::new(vec![
            Vector::new(vec![0.0, 0.0]),
            Vector::new(vec![3.0, 4.0]),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dim(), 2);
        assert_eq!(set.get(1).unwrap().as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_empty_set_allowed_at_construction() {
        // Rejected later: the ranker and artifact validation both refuse it
        let set = CentroidSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.dim(), 0);
    }
}
