//! Benchmarks for chain operations
//!
//! Run with: cargo bench
//!
//! Every measured operation crosses at least one thread handshake per
//! touched node, so these numbers are dominated by rendezvous cost.

use asynchain_rs::{Chain, Word};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_push_pull(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pull");

    for size in [8usize, 32, 64].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut chain = Chain::new();
            b.iter(|| {
                for w in 0..size {
                    chain.push(0, black_box(w as Word));
                }
                while chain.pull(0).is_ok() {}
            });
            chain.stop();
        });
    }

    group.finish();
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorts");

    let input: Vec<Word> = (0..24u8).rev().collect();
    group.bench_function("bubble_sort_24", |b| {
        let mut chain = Chain::new();
        b.iter(|| {
            chain.load_words(0, black_box(&input));
            chain.bubble_sort(0);
        });
        chain.stop();
    });
    group.bench_function("selection_sort_24", |b| {
        let mut chain = Chain::new();
        b.iter(|| {
            chain.load_words(0, black_box(&input));
            chain.selection_sort(0);
        });
        chain.stop();
    });
    group.bench_function("insertion_sort_24", |b| {
        let mut chain = Chain::new();
        b.iter(|| {
            chain.load_words(0, black_box(&input));
            chain.insertion_sort(0);
        });
        chain.stop();
    });

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let a: Vec<Word> = (0..16u8).map(|w| w * 2 + 1).collect();
    let b_words: Vec<Word> = (0..16u8).map(|w| w * 2).collect();
    group.bench_function("merge_sorted_into_16_16", |b| {
        let mut chain = Chain::new();
        b.iter(|| {
            chain.load_words(0, black_box(&a));
            chain.load_words(1, black_box(&b_words));
            chain.merge_sorted_into(0, 1);
        });
        chain.stop();
    });

    group.finish();
}

criterion_group!(benches, bench_push_pull, bench_sorts, bench_merge);
criterion_main!(benches);
