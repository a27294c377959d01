//! Benchmark: build, fill and encode unsigned-integer items of each width.
//! `encode_*` measures `to_bytes` on a resolved node; `fill_*` measures substitution of
//! every other element followed by encoding (the template-instantiation path).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use secs2ast::{ItemNode, ItemValue, UintNode};
use std::collections::HashMap;

const COUNT: usize = 1024;

fn resolved_node(width: usize) -> UintNode {
    let max = if width == 8 { u64::MAX } else { (1u64 << (width * 8)) - 1 };
    UintNode::new(width, (0..COUNT).map(|i| (i as u64).wrapping_mul(2654435761) & max))
        .expect("valid node")
}

fn template_node(width: usize) -> (UintNode, HashMap<String, ItemValue>) {
    let inputs: Vec<ItemValue> = (0..COUNT)
        .map(|i| {
            if i % 2 == 0 {
                ItemValue::Variable(format!("V{}", i))
            } else {
                ItemValue::U8((i % 256) as u8)
            }
        })
        .collect();
    let values = (0..COUNT)
        .step_by(2)
        .map(|i| (format!("V{}", i), ItemValue::U8((i % 200) as u8)))
        .collect();
    (UintNode::new(width, inputs).expect("valid template"), values)
}

fn bench_uint(c: &mut Criterion) {
    for width in [1usize, 2, 4, 8] {
        let node = resolved_node(width);
        c.bench_function(&format!("encode_u{}_x{}", width, COUNT), |b| {
            b.iter(|| black_box(black_box(&node).to_bytes()))
        });

        let (template, values) = template_node(width);
        c.bench_function(&format!("fill_encode_u{}_x{}", width, COUNT), |b| {
            b.iter(|| {
                let filled = black_box(&template).fill_values(black_box(&values)).expect("fill");
                black_box(filled.to_bytes())
            })
        });
    }
}

criterion_group!(benches, bench_uint);
criterion_main!(benches);
