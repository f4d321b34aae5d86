use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planrec_core::{
    CentroidSet, Engine, FeatureSchema, ModelArtifacts, PlanCatalog, PlanCatalogEntry,
    ScalerParams, UsageRecord, Vector,
};
use std::sync::Arc;

fn synthetic_engine(features: usize, clusters: usize) -> Engine {
    let schema: FeatureSchema = (0..features).map(|i| format!("Feature {i}")).collect();
    let scaler = ScalerParams::new(vec![100.0; features], vec![25.0; features]).unwrap();
    let centroids = CentroidSet::new(
        (0..clusters)
            .map(|c| Vector::new((0..features).map(|f| (c * features + f) as f64).collect()))
            .collect(),
    )
    .unwrap();
    let catalog = PlanCatalog::new(
        (0..clusters as u32)
            .map(|plan_id| PlanCatalogEntry {
                plan_id,
                name: format!("Plan {plan_id}"),
                price: 10.0 + f64::from(plan_id),
                centroid: format!("{{'cluster': {plan_id}}}"),
            })
            .collect(),
    );
    let artifacts = ModelArtifacts::new(schema, scaler, centroids, catalog).unwrap();
    Engine::new(Arc::new(artifacts))
}

fn bench_recommend(c: &mut Criterion) {
    let engine = synthetic_engine(8, 50);
    let record = UsageRecord::new()
        .with("Feature 0", 120.0)
        .with("Feature 3", 80.5)
        .with("Feature 7", 3.0);

    c.bench_function("recommend_top3_50_clusters", |b| {
        b.iter(|| engine.recommend(black_box(&record), 3).unwrap())
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
