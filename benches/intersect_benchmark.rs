use bid_tracker::models::{District, RegionGeometry, Trip};
use bid_tracker::services::{analysis, Pipeline, PipelineParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geo::{LineString, Polygon};

/// Deterministic pseudo-random f64 in [0, 1) (no RNG dependency needed).
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// An n x n grid of small square districts over lower Manhattan.
fn grid_districts(n: usize) -> Vec<District> {
    let mut districts = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let min_x = -74.02 + i as f64 * 0.006;
            let min_y = 40.70 + j as f64 * 0.006;
            let (max_x, max_y) = (min_x + 0.004, min_y + 0.004);
            districts.push(District {
                name: format!("District {}-{}", i, j),
                properties: None,
                geometry: RegionGeometry::Polygon(Polygon::new(
                    LineString::from(vec![
                        (min_x, min_y),
                        (max_x, min_y),
                        (max_x, max_y),
                        (min_x, max_y),
                        (min_x, min_y),
                    ]),
                    vec![],
                )),
            });
        }
    }
    districts
}

/// Synthetic trips scattered over the same bounding box as the grid.
fn synthetic_trips(count: usize) -> Vec<Trip> {
    let mut rng = Lcg(42);
    (0..count)
        .map(|_| {
            let pickup = [-74.02 + rng.next() * 0.06, 40.70 + rng.next() * 0.06];
            let dropoff = [-74.02 + rng.next() * 0.06, 40.70 + rng.next() * 0.06];
            Trip::new(pickup, dropoff)
        })
        .collect()
}

fn benchmark_analyze(c: &mut Criterion) {
    let districts = grid_districts(10);
    let trips = synthetic_trips(2000);

    // Same trips shifted far east: complex input, zero matches
    let far_trips: Vec<Trip> = trips
        .iter()
        .map(|t| {
            Trip::new(
                [t.pickup.x() + 5.0, t.pickup.y()],
                [t.dropoff.x() + 5.0, t.dropoff.y()],
            )
        })
        .collect();

    let mut group = c.benchmark_group("intersection_analysis");

    group.bench_function("trips_2000_districts_100", |b| {
        b.iter(|| analysis::analyze(black_box(&trips), black_box(&districts)))
    });

    group.bench_function("trips_2000_no_matches", |b| {
        b.iter(|| analysis::analyze(black_box(&far_trips), black_box(&districts)))
    });

    group.finish();
}

fn benchmark_recompute(c: &mut Criterion) {
    let districts = grid_districts(5);
    let borough = grid_districts(2);

    let mut pipeline = Pipeline::new();
    pipeline.set_districts(districts);
    pipeline.set_exclusions(borough);
    let params = PipelineParams {
        buffer_distance_m: 100,
        exclusion_enabled: true,
    };

    c.bench_function("recompute_buffer_and_exclude_25", |b| {
        b.iter(|| pipeline.set_params(black_box(params)))
    });
}

criterion_group!(benches, benchmark_analyze, benchmark_recompute);
criterion_main!(benches);
