//! Performance benchmarks for tokenization and member extraction.
//!
//! Measures the two hot paths of a conflict scan: turning override
//! source text into tokens, and walking the token stream for member
//! names. File I/O and directory walking are excluded; they are
//! dominated by the filesystem.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use overscan::{extract_members, members_conflict};
use overscan_parser::tokenize;

/// Build a synthetic override class with the given number of members
/// of each kind.
fn synthetic_override(members: usize) -> String {
    let mut source = String::from("<?php\n\nclass SyntheticOverride\n{\n");
    for i in 0..members {
        source.push_str(&format!("    const OPTION_{i} = {i};\n"));
        source.push_str(&format!("    private $field{i} = null;\n"));
        source.push_str(&format!(
            "    public function handler{i}($input)\n    {{\n        $local = $input + {i};\n        return $local;\n    }}\n"
        ));
    }
    source.push_str("}\n");
    source
}

fn tokenize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/tokenize");

    for (name, members) in [("small_10_members", 10), ("large_200_members", 200)] {
        let source = synthetic_override(members);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(tokenize(black_box(&source))).len());
        });
    }

    group.finish();
}

fn extract_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/extract");

    for (name, members) in [("small_10_members", 10), ("large_200_members", 200)] {
        let source = synthetic_override(members);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let members = extract_members(black_box(&source));
                black_box(members.methods.len())
            });
        });
    }

    group.finish();
}

fn conflict_benchmarks(c: &mut Criterion) {
    let a = extract_members(&synthetic_override(200));
    // Disjoint counterpart: worst case, every set fully probed.
    let b_source = synthetic_override(200).replace("handler", "other_handler");
    let b_source = b_source.replace("$field", "$other_field");
    let b_source = b_source.replace("OPTION_", "CHOICE_");
    let b = extract_members(&b_source);

    c.bench_function("scanner/conflict_disjoint_200", |bch| {
        bch.iter(|| black_box(members_conflict(black_box(&a), black_box(&b))));
    });
}

criterion_group!(
    benches,
    tokenize_benchmarks,
    extract_benchmarks,
    conflict_benchmarks
);
criterion_main!(benches);
