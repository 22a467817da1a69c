use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    ALL_DISTRIBUTIONS, SIZE_LADDER, apply_runtime_for_len, default_rng, generate, skip_quadratic,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shell_sort::{SortContext, algorithm_name, all_algorithms, is_quadratic, sort_with_ctx};

fn bench_sort(c: &mut Criterion) {
    let mut rng = default_rng();

    for &dist in &ALL_DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("shell_sort/{}", dist.label()));

        for &size in &SIZE_LADDER {
            apply_runtime_for_len(&mut group, size);
            let base = generate(dist, size, &mut rng);

            for &algo in all_algorithms() {
                if is_quadratic(algo) && skip_quadratic(size, dist) {
                    continue;
                }
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        let mut ctx = SortContext::default();
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            let stats = sort_with_ctx(algo, &mut data, &mut ctx);
                            total += start.elapsed();
                            black_box((&data, stats.ok()));
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
