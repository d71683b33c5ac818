// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Performance benchmarks for the traversal engines and printer.
//!
//! Run with:
//! ```bash
//! cargo bench -p cstwalk-cst
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use cstwalk_cst::{
    print_source, EventRecorder, NodeKind, PrinterConfig, SyntaxNode, Traversal, TraversalOptions,
};

// =============================================================================
// Test Data Generation
// =============================================================================

fn ident(text: &str) -> SyntaxNode {
    SyntaxNode::leaf(NodeKind::Ident, text)
}

/// `if (x_i < i) { total += call_i(x_i) } else { total -= i }`, numbered lines.
fn generate_statements(count: usize) -> Vec<SyntaxNode> {
    (0..count)
        .map(|i| {
            let line = u32::try_from(i + 1).unwrap_or(u32::MAX);
            let var = format!("x_{i}");
            let cond = SyntaxNode::new(NodeKind::Expr).child(
                SyntaxNode::new(NodeKind::Lt)
                    .at(line, 8)
                    .child(ident(&var).at(line, 5))
                    .child(SyntaxNode::leaf(NodeKind::NumInt, i.to_string()).at(line, 10)),
            );
            let call = SyntaxNode::new(NodeKind::MethodCall)
                .at(line, 30)
                .child(ident(&format!("call_{i}")).at(line, 24))
                .child(SyntaxNode::new(NodeKind::Elist).child(ident(&var).at(line, 31)));
            let then = SyntaxNode::new(NodeKind::Slist).at(line, 14).child(
                SyntaxNode::new(NodeKind::Expr).child(
                    SyntaxNode::new(NodeKind::PlusAssign)
                        .at(line, 22)
                        .child(ident("total").at(line, 16))
                        .child(call),
                ),
            );
            let otherwise = SyntaxNode::new(NodeKind::Slist).at(line, 45).child(
                SyntaxNode::new(NodeKind::Expr).child(
                    SyntaxNode::new(NodeKind::MinusAssign)
                        .at(line, 53)
                        .child(ident("total").at(line, 47))
                        .child(SyntaxNode::leaf(NodeKind::NumInt, i.to_string()).at(line, 56)),
                ),
            );
            SyntaxNode::new(NodeKind::LiteralIf)
                .at(line, 1)
                .child(cond)
                .child(then)
                .child(otherwise)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for size in [100, 1000, 5000].iter() {
        let roots = generate_statements(*size);
        let nodes: usize = roots.iter().map(SyntaxNode::subtree_len).sum();
        group.throughput(Throughput::Elements(nodes as u64));

        for traversal in Traversal::ALL {
            group.bench_with_input(
                BenchmarkId::new(traversal.name(), format!("{size}_statements")),
                &roots,
                |b, roots| {
                    b.iter(|| {
                        let mut recorder = EventRecorder::new();
                        let _ = black_box(
                            traversal
                                .run(roots, &mut recorder, &TraversalOptions::default())
                                .unwrap(),
                        );
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");
    for size in [100, 1000, 5000].iter() {
        let roots = generate_statements(*size);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_statements")),
            &roots,
            |b, roots| {
                b.iter(|| {
                    let _ = black_box(print_source(roots, &PrinterConfig::default()).unwrap());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(traversal, bench_traversals, bench_print);
criterion_main!(traversal);
