//! Benchmark for case evaluation.
//!
//! Compares literal, regular expression and type-tag case lists against a
//! native `match`, with the selected case at the end of the list.

use casebox::container::Optional;
use casebox::matching::{
    Case, Value, evaluate, literal_case, regex_case, tags, type_tag_case, wildcard_case,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Literal Benchmark
// =============================================================================

fn benchmark_literal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("literal");

    let mut cases: Vec<Case<'_, i32, i32>> = (0..16)
        .map(|literal| literal_case(literal, move |value: &i32| value + literal))
        .collect();
    cases.push(wildcard_case(|_: &i32| -1));

    group.bench_function("evaluate", |bencher| {
        bencher.iter(|| black_box(evaluate(black_box(&15), &cases)));
    });

    group.bench_function("native_match", |bencher| {
        bencher.iter(|| {
            let value = *black_box(&15);
            black_box(match value {
                0..=15 => value + value,
                _ => -1,
            })
        });
    });

    group.finish();
}

// =============================================================================
// Regex Benchmark
// =============================================================================

fn benchmark_regex(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("regex");

    let cases: Vec<Case<'_, &str, &str>> = [
        (r"^\d+$", "number"),
        (r"^[a-z]+$", "lower"),
        (r"^[A-Z]+$", "upper"),
    ]
    .into_iter()
    .filter_map(|(expression, label)| regex_case(expression, move |_: &&str| label).ok())
    .chain([wildcard_case(|_: &&str| "else")])
    .collect();

    group.bench_function("evaluate_hit", |bencher| {
        bencher.iter(|| black_box(evaluate(black_box(&"UPPER"), &cases)));
    });

    group.bench_function("evaluate_fallback", |bencher| {
        bencher.iter(|| black_box(evaluate(black_box(&"Mixed1"), &cases)));
    });

    group.finish();
}

// =============================================================================
// Type Tag Benchmark
// =============================================================================

fn benchmark_type_tag(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("type_tag");

    let cases: Vec<Case<'_, Value, &str>> = vec![
        type_tag_case(tags::LEFT, |_: &Value| "left"),
        type_tag_case(tags::RIGHT, |_: &Value| "right"),
        type_tag_case(tags::EMPTY, |_: &Value| "empty"),
        type_tag_case(tags::CONTAINER, |_: &Value| "container"),
        wildcard_case(|_: &Value| "else"),
    ];
    let subject = Value::tagged(Optional::Filled(1));

    group.bench_function("supertype", |bencher| {
        bencher.iter(|| black_box(evaluate(black_box(&subject), &cases)));
    });

    group.bench_function("wildcard", |bencher| {
        let plain = Value::from(1);
        bencher.iter(|| black_box(evaluate(black_box(&plain), &cases)));
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_literal, benchmark_regex, benchmark_type_tag);

criterion_main!(benches);
