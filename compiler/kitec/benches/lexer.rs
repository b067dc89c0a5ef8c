//! Scanner benchmarks for `kite_lexer`.
//!
//! Measures tokenization throughput: tokens are consumed in a tight loop
//! without collecting into a Vec.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kite_lexer::Scanner;

/// Generate N small functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "let func_{} = fn(x, y) {{\n  if (x != y) {{ return x + {i}; }} else {{ return \"same\"; }}\n}};",
                "f".repeat(i % 7 + 1)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let mut scanner = Scanner::new(src.as_bytes());
                    loop {
                        let tok = scanner.next_token();
                        if tok.is_eof() {
                            break;
                        }
                        black_box(tok);
                    }
                });
            },
        );
    }

    group.finish();
}

/// Worst case for the identifier path: one long run of letters.
fn bench_long_identifier(c: &mut Criterion) {
    let source = "a".repeat(64 * 1024);
    c.bench_function("lexer/long_identifier", |b| {
        b.iter(|| black_box(Scanner::new(black_box(source.as_bytes())).next_token()));
    });
}

criterion_group!(benches, bench_throughput, bench_long_identifier);
criterion_main!(benches);
