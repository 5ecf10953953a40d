//! Benchmarks for parsing and truth-table scans.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use propeq_core::{check_equivalence, parse_sentence, Checker, Limits, Trailing, VariableTable};

/// Conjunction of `width` distinct variables: `x0 & x1 & ...`.
fn conjunction(width: usize) -> String {
    (0..width)
        .map(|i| format!("x{i}"))
        .collect::<Vec<_>>()
        .join(" & ")
}

/// De Morgan pair over `width` variables, equivalent by construction.
fn de_morgan(width: usize) -> (String, String) {
    let first = format!("!({})", conjunction(width));
    let second = (0..width)
        .map(|i| format!("!x{i}"))
        .collect::<Vec<_>>()
        .join(" | ");
    (first, second)
}

fn bench_tokenize_parse(c: &mut Criterion) {
    let limits = Limits::default();
    let text = conjunction(16);

    c.bench_function("parse_conjunction_16", |b| {
        b.iter(|| {
            let mut vars = VariableTable::new(limits.max_variables);
            parse_sentence(black_box(&text), &mut vars, &limits, Trailing::Ignore).unwrap()
        })
    });
}

fn bench_scan(c: &mut Criterion) {
    let limits = Limits::default();
    for width in [4, 10, 16] {
        let (first, second) = de_morgan(width);
        let mut vars = VariableTable::new(limits.max_variables);
        let a = parse_sentence(&first, &mut vars, &limits, Trailing::Ignore).unwrap();
        let b = parse_sentence(&second, &mut vars, &limits, Trailing::Ignore).unwrap();
        let n = vars.len();

        c.bench_function(&format!("scan_de_morgan_{width}_vars"), |bench| {
            bench.iter(|| check_equivalence(black_box(&a), black_box(&b), n))
        });
    }
}

fn bench_short_circuit(c: &mut Criterion) {
    // Differs at the first assignment, so the scan stops immediately.
    let first = conjunction(16);
    let second = format!("!({first})");
    let checker = Checker::new();

    c.bench_function("check_differs_first_row_16_vars", |b| {
        b.iter(|| checker.check(black_box(&first), black_box(&second)).unwrap())
    });
}

criterion_group!(benches, bench_tokenize_parse, bench_scan, bench_short_circuit);

criterion_main!(benches);
