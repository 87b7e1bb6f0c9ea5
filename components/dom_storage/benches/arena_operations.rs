use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dom_storage::{gc, NodeArena};

fn benchmark_allocation(c: &mut Criterion) {
    c.bench_function("allocate_single_node", |b| {
        let arena: NodeArena<String> = NodeArena::new();
        b.iter(|| {
            let id = arena.insert(black_box("test_node".to_string()));
            black_box(id);
        });
    });
}

fn benchmark_read(c: &mut Criterion) {
    let arena: NodeArena<String> = NodeArena::new();
    let id = arena.insert("test_node".to_string());

    c.bench_function("read_node", |b| {
        b.iter(|| {
            let value = arena.with(black_box(id), |s| s.len());
            black_box(value);
        });
    });
}

fn benchmark_removal(c: &mut Criterion) {
    c.bench_function("remove_node", |b| {
        b.iter_batched(
            || {
                let arena: NodeArena<String> = NodeArena::new();
                let id = arena.insert("test_node".to_string());
                (arena, id)
            },
            |(arena, id)| {
                arena.remove(black_box(id));
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn benchmark_gc(c: &mut Criterion) {
    c.bench_function("gc_10k_nodes", |b| {
        b.iter_batched(
            || {
                let arena: NodeArena<String> = NodeArena::new();
                let ids: Vec<_> = (0..10_000).map(|i| arena.insert(format!("node_{i}"))).collect();
                let roots: Vec<_> = ids.iter().step_by(2).copied().collect();
                (arena, roots)
            },
            |(arena, roots)| {
                let stats = gc::collect(&arena, &roots, |_| Vec::new());
                black_box(stats);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, benchmark_allocation, benchmark_read, benchmark_removal, benchmark_gc);
criterion_main!(benches);
