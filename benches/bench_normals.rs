use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangeimage_normals::estimate_normals_from_slices;

/// A dense scan-like input: every depth valid, vertices jittered around a
/// plane so almost every pixel produces a normal.
fn random_scan(w: usize, h: usize, seed: u64) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let depths: Vec<f32> = (0..w * h).map(|_| rng.gen_range(1.0f32..50.0)).collect();
    let mut verts = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            verts.push(x as f32 * 0.1 + rng.gen_range(-0.01f32..0.01));
            verts.push(y as f32 * 0.1 + rng.gen_range(-0.01f32..0.01));
            verts.push(rng.gen_range(-0.05f32..0.05));
        }
    }
    (depths, verts)
}

fn bench_estimate_normals(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_normals");
    for (w, h) in [(1024, 64), (2048, 128)] {
        let (depths, verts) = random_scan(w, h, 42);
        group.bench_with_input(
            BenchmarkId::new("rangeimage-rs", format!("{}x{}", w, h)),
            &(depths, verts),
            |b, (depths, verts)| b.iter(|| estimate_normals_from_slices(depths, verts, w, h)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_estimate_normals);
criterion_main!(benches);
