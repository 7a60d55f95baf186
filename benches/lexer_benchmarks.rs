//! Бенчмарки для sqllexer

use criterion::{criterion_group, criterion_main, Criterion};
use sqllexer::{tokenize, tokenize_reader, Lexer, LexerConfig};
use std::hint::black_box;

fn sample_script(statements: usize) -> String {
    let mut sql = String::new();
    for i in 0..statements {
        sql.push_str(&format!(
            "-- statement {i}\nSELECT o.[Id], N'name''{i}' FROM dbo.[Orders]] {i}] o /* filter */ \
             WHERE o.Total >= {i} AND o.Code <> 'X';\n"
        ));
    }
    sql
}

fn tokenize_str_benchmark(c: &mut Criterion) {
    let sql = sample_script(200);
    c.bench_function("tokenize_str", |b| {
        b.iter(|| tokenize(Some(black_box(sql.as_str())), false).unwrap());
    });
}

fn tokenize_skip_sundry_benchmark(c: &mut Criterion) {
    let sql = sample_script(200);
    c.bench_function("tokenize_skip_sundry", |b| {
        b.iter(|| tokenize(Some(black_box(sql.as_str())), true).unwrap());
    });
}

fn tokenize_reader_benchmark(c: &mut Criterion) {
    let sql = sample_script(200);
    c.bench_function("tokenize_reader", |b| {
        b.iter(|| tokenize_reader(Some(black_box(sql.as_bytes())), false).unwrap());
    });
}

fn batch_size_benchmark(c: &mut Criterion) {
    let sql = sample_script(200);
    let mut group = c.benchmark_group("batch_size");
    for batch_size in [1, 16, 64, 1024] {
        let lexer = Lexer::new(LexerConfig {
            batch_size,
            ..LexerConfig::default()
        })
        .unwrap();
        group.bench_function(batch_size.to_string(), |b| {
            b.iter(|| lexer.tokenize_str(black_box(&sql)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    tokenize_str_benchmark,
    tokenize_skip_sundry_benchmark,
    tokenize_reader_benchmark,
    batch_size_benchmark
);
criterion_main!(benches);
