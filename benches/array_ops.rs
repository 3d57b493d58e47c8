use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use labkit::{bubble_sort, checked_multiply, multiply, Array2D};

fn descending(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}

fn square(n: usize) -> Array2D<i32> {
    let data = (0..(n * n) as i32).map(|x| x % 97 - 48).collect();
    Array2D::from_row_major(n, n, data).unwrap()
}

pub fn sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_sort");
    for n in [16, 128, 1024] {
        group.bench_with_input(BenchmarkId::new("reversed", n), &n, |b, &n| {
            b.iter_batched(|| descending(n), |mut v| bubble_sort(black_box(&mut v)), BatchSize::SmallInput);
        });
    }
    group.finish();
}

pub fn matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for n in [8, 32, 128] {
        let m = square(n);
        group.bench_with_input(BenchmarkId::new("wrapping", n), &m, |b, m| {
            b.iter(|| multiply(black_box(m), black_box(m)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("checked", n), &m, |b, m| {
            b.iter(|| checked_multiply(black_box(m), black_box(m)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, sort, matmul);
criterion_main!(benches);
