//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package cplx-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cplx_lex::{lex, Lexer};

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).filter(Result::is_ok).count()
}

fn bench_lexer_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "z = (3.5 + 4i) ** 2 / conj(w) - [1, 2; 3, 4] * x % 7";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_sum", |b| b.iter(|| lexer_token_count(black_box("1 + 2"))));

    group.bench_function("complex_expression", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("collect_vec", |b| b.iter(|| lex(black_box(source))));

    group.finish();
}

fn bench_lexer_long_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_long_tokens");

    let ident = "abcdefghij".repeat(1_000);
    group.throughput(Throughput::Bytes(ident.len() as u64));
    group.bench_function("long_identifier", |b| {
        b.iter(|| lexer_token_count(black_box(&ident)))
    });

    let number = format!("{}.{}", "1234567890".repeat(500), "9".repeat(5_000));
    group.throughput(Throughput::Bytes(number.len() as u64));
    group.bench_function("long_number", |b| {
        b.iter(|| lexer_token_count(black_box(&number)))
    });

    group.finish();
}

fn bench_lexer_many_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_many_tokens");

    let source = (0..10_000)
        .map(|n| format!("{}i", n))
        .collect::<Vec<_>>()
        .join(" ** ");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("imaginary_powers", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    let whitespace = format!("{}1{}", " \t\n".repeat(10_000), " ".repeat(10_000));
    group.throughput(Throughput::Bytes(whitespace.len() as u64));
    group.bench_function("mostly_whitespace", |b| {
        b.iter(|| lexer_token_count(black_box(&whitespace)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_expressions,
    bench_lexer_long_tokens,
    bench_lexer_many_tokens
);
criterion_main!(benches);
