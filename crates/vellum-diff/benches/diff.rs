use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vellum_diff::{diff, undiff};
use vellum_types::{Labeled, Node, UndiffDirection};

fn numbers(len: usize, stride: usize) -> Node {
    Node::sequence((0..len).map(|i| Node::leaf((i * stride % 97).to_string())))
}

fn records(len: usize, tweak: usize) -> Node {
    Node::sequence((0..len).map(|i| {
        Node::record(
            "Item",
            [
                Labeled::new("id", Node::leaf(i.to_string())),
                Labeled::new("value", Node::leaf(((i + tweak) % 13).to_string())),
            ],
        )
    }))
}

fn bench_sequence_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_diff");
    for len in [16, 256, 2048] {
        let original = numbers(len, 3);
        let update = numbers(len, 5);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| diff(black_box(&original), black_box(&update)))
        });
    }
    group.finish();
}

fn bench_record_diff(c: &mut Criterion) {
    let original = records(512, 0);
    let update = records(512, 1);
    c.bench_function("record_sequence_diff_512", |b| {
        b.iter(|| diff(black_box(&original), black_box(&update)))
    });
}

fn bench_undiff(c: &mut Criterion) {
    let diffed = diff(&records(512, 0), &records(512, 1));
    c.bench_function("undiff_512", |b| {
        b.iter(|| undiff(black_box(&diffed), UndiffDirection::Update))
    });
}

criterion_group!(benches, bench_sequence_diff, bench_record_diff, bench_undiff);
criterion_main!(benches);
