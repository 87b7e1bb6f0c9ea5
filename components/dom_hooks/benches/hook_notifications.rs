//! Benchmarks for the mutation-observer hook under attribute churn.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dom_core::Document;
use dom_hooks::{MutationObserver, MutationObserverInit};
use std::sync::Arc;

fn bench_attribute_mutation_queueing(c: &mut Criterion) {
    let doc = Arc::new(Document::new());
    let observer = MutationObserver::new(doc.clone(), |_records| {});
    observer.attach();

    let div = doc.create_element("div").unwrap();
    observer
        .observe(div, MutationObserverInit { attributes: true, ..Default::default() })
        .unwrap();

    c.bench_function("mutation observer queues an attribute change", |b| {
        b.iter(|| {
            doc.set_attribute(black_box(div), "class".into(), "active".into()).unwrap();
            observer.take_records();
        });
    });
}

fn bench_subtree_observation_depth_20(c: &mut Criterion) {
    let doc = Arc::new(Document::new());
    let observer = MutationObserver::new(doc.clone(), |_records| {});
    observer.attach();

    let mut current = doc.body().unwrap();
    for _ in 0..20 {
        let child = doc.create_element("div").unwrap();
        doc.append_child(current, child).unwrap();
        current = child;
    }
    let root = doc.body().unwrap();
    observer
        .observe(root, MutationObserverInit { attributes: true, subtree: true, ..Default::default() })
        .unwrap();

    c.bench_function("subtree observation walks ancestry to depth 20", |b| {
        b.iter(|| {
            doc.set_attribute(black_box(current), "data-x".into(), "1".into()).unwrap();
            observer.take_records();
        });
    });
}

criterion_group!(benches, bench_attribute_mutation_queueing, bench_subtree_observation_depth_20);
criterion_main!(benches);
