use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};

use cursorseq::sequence::prelude::*;

fn filled(capacity: usize, count: usize) -> Sequence<String> {
    let mut sequence = Sequence::allocate(capacity);
    for i in 0..count {
        sequence.add_after(i.to_string());
    }
    sequence
}

fn sequence_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequence");

    for &count in &[100usize, 1_000, 10_000] {
        // ------------------------------------------------------------
        // add_after from a single slot (amortized growth)
        // ------------------------------------------------------------
        group.bench_with_input(
            BenchmarkId::new("add_after/grow", count),
            &count,
            |b, &n| {
                b.iter(|| black_box(filled(1, n)));
            },
        );

        // ------------------------------------------------------------
        // add_before at the front (shift every element)
        // ------------------------------------------------------------
        group.bench_with_input(
            BenchmarkId::new("add_before/front", count),
            &count,
            |b, &n| {
                b.iter(|| {
                    let mut sequence = Sequence::allocate(n);
                    for i in 0..n {
                        sequence.add_before(i.to_string());
                    }
                    black_box(sequence)
                });
            },
        );

        // ------------------------------------------------------------
        // add_all (up-front growth, cursor restored)
        // ------------------------------------------------------------
        let other = filled(count, count);
        group.bench_with_input(
            BenchmarkId::new("add_all", count),
            &count,
            |b, &n| {
                b.iter(|| {
                    let mut sequence = filled(n, n);
                    sequence.add_all(&other);
                    black_box(sequence)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, sequence_bench);
criterion_main!(benches);
