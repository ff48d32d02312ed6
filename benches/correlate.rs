//! Benchmarks for fingerprinting and index construction.

use criterion::{criterion_group, criterion_main, Criterion};
use oas_explorer::model::{Change, ChangeContext, ChangeKind, GraphNode, TreeNode};
use oas_explorer::{build_index, fingerprint};
use std::hint::black_box;

fn synthetic_change(i: u32) -> Change {
    Change {
        breaking: i % 7 == 0,
        kind: ChangeKind::Modified,
        property: format!("paths./pets/{i}.get.summary"),
        original: Some(format!("old value {i}")),
        new: Some(format!("new value {i}")),
        context: ChangeContext {
            original_line: Some(i + 1),
            original_column: Some(3),
            new_line: Some(i + 1),
            new_column: Some(3),
        },
    }
}

fn synthetic_tree(n: u32) -> TreeNode {
    let children = (0..n)
        .map(|i| TreeNode {
            key: format!("k{i}"),
            title_string: format!("summary {i}"),
            is_leaf: true,
            total_changes: 1,
            breaking_changes: 0,
            change: Some(synthetic_change(i)),
            children: None,
        })
        .collect();
    TreeNode {
        key: "root".into(),
        title_string: "document".into(),
        is_leaf: false,
        total_changes: n,
        breaking_changes: 0,
        change: None,
        children: Some(children),
    }
}

fn synthetic_graph(n: u32) -> Vec<GraphNode> {
    (0..n)
        .map(|i| GraphNode {
            id: format!("n{i}"),
            text: None,
            data: Some(synthetic_change(i)),
        })
        .collect()
}

fn benchmark_fingerprint(c: &mut Criterion) {
    let change = synthetic_change(42);
    c.bench_function("fingerprint_single_change", |b| {
        b.iter(|| fingerprint(black_box(&change)));
    });
}

fn benchmark_build_index(c: &mut Criterion) {
    let tree = synthetic_tree(1000);
    let graph = synthetic_graph(1000);
    c.bench_function("build_index_1000_changes", |b| {
        b.iter(|| build_index(black_box(Some(&tree)), black_box(&graph)));
    });
}

criterion_group!(benches, benchmark_fingerprint, benchmark_build_index);
criterion_main!(benches);
