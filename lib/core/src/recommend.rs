//! Recommendation assembly
//!
//! Joins ranked (cluster index, distance) pairs to catalog rows and attaches
//! the parsed centroid description. A ranked index with no catalog row means
//! the `plan_id == cluster index` contract is broken; that is surfaced, never
//! skipped.

use crate::describe::{parse_description, ParsedDescription};
use crate::{Error, PlanCatalog, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single recommended plan, in rank order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub plan_id: u32,
    pub name: String,
    pub price: f64,
    pub distance: f64,
    pub centroid: Value,
}

/// Resolve ranked cluster indices into catalog-backed recommendations
pub fn assemble(ranked: &[(usize, f64)], catalog: &PlanCatalog) -> Result<Vec<Recommendation>> {
    let mut recommendations = Vec::with_capacity(ranked.len());

    for &(index, distance) in ranked {
        let plan_id = u32::try_from(index).map_err(|_| Error::PlanNotFound(index))?;
        let entry = catalog.get(plan_id).ok_or(Error::PlanNotFound(index))?;

        let centroid = match parse_description(&entry.centroid) {
            ParsedDescription::Parsed(value) => value,
            ParsedDescription::ParseFailed => return Err(Error::DataCorruption(entry.plan_id)),
        };

        recommendations.push(Recommendation {
            plan_id: entry.plan_id,
            name: entry.name.clone(),
            price: entry.price,
            distance,
            centroid,
        });
    }

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanCatalogEntry;
    use serde_json::json;

    fn catalog() -> PlanCatalog {
        PlanCatalog::new(vec![
            PlanCatalogEntry {
                plan_id: 0,
                name: "Basic".to_string(),
                price: 19.0,
                centroid: r#"{"avg_day_mins": 120.0}"#.to_string(),
            },
            PlanCatalogEntry {
                plan_id: 1,
                name: "Plus".to_string(),
                price: 29.0,
                centroid: "{'avg_day_mins': 310.0}".to_string(),
            },
        ])
    }

    #[test]
    fn test_assemble_preserves_rank_order() {
        let recs = assemble(&[(1, 0.5), (0, 2.0)], &catalog()).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].plan_id, 1);
        assert_eq!(recs[0].name, "Plus");
        assert_eq!(recs[0].distance, 0.5);
        assert_eq!(recs[0].centroid, json!({"avg_day_mins": 310.0}));
        assert_eq!(recs[1].plan_id, 0);
    }

    #[test]
    fn test_missing_plan_surfaces_not_found() {
        let err = assemble(&[(7, 1.0)], &catalog()).unwrap_err();
        assert!(matches!(err, Error::PlanNotFound(7)));
    }

    #[test]
    fn test_unparseable_description_is_corruption() {
        let broken = PlanCatalog::new(vec![PlanCatalogEntry {
            plan_id: 0,
            name: "Broken".to_string(),
            price: 9.0,
            centroid: "{'oops: ".to_string(),
        }]);
        let err = assemble(&[(0, 0.0)], &broken).unwrap_err();
        assert!(matches!(err, Error::DataCorruption(0)));
    }
}
