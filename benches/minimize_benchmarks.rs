//! Benchmark suite for exact minimization
//!
//! Solves fixed pseudo-structured problems at growing widths. The algorithm
//! is exponential, so the widths stay modest; the interesting signal is how
//! the combination phase and the branching search scale relative to each
//! other.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qmc_logic::ProblemBuilder;

/// A deterministic problem with some structure: multiples of 3 are true,
/// multiples of 7 (that are not already true) are don't-cares.
fn structured_terms(width: usize) -> (Vec<u64>, Vec<u64>) {
    let limit = 1u64 << width;
    let minterms: Vec<u64> = (0..limit).filter(|n| n % 3 == 0).collect();
    let dontcares: Vec<u64> = (0..limit).filter(|n| n % 3 != 0 && n % 7 == 0).collect();
    (minterms, dontcares)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for width in [4usize, 5, 6] {
        let (minterms, dontcares) = structured_terms(width);
        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &(minterms, dontcares),
            |b, (minterms, dontcares)| {
                b.iter(|| {
                    let mut problem = ProblemBuilder::new(width)
                        .minterms(minterms.iter().copied())
                        .dontcares(dontcares.iter().copied())
                        .build()
                        .expect("valid problem");
                    black_box(problem.solve().len())
                })
            },
        );
    }
    group.finish();
}

fn bench_prime_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_primes");
    for width in [6usize, 7, 8] {
        let (minterms, dontcares) = structured_terms(width);
        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &(minterms, dontcares),
            |b, (minterms, dontcares)| {
                b.iter(|| {
                    let mut problem = ProblemBuilder::new(width)
                        .minterms(minterms.iter().copied())
                        .dontcares(dontcares.iter().copied())
                        .build()
                        .expect("valid problem");
                    black_box(problem.find_primes().len())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_prime_generation);
criterion_main!(benches);
