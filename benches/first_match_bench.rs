//! Benchmark for first-match chains.
//!
//! Measures static composition, runtime sequences and the boxed `Chain`
//! against a hand-written `or_else` cascade, to evaluate the overhead of each
//! way of building the same chain.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fallthrough::chain::Chain;
use fallthrough::first_match;
use fallthrough::partial::{PartialFunction, single_point};
use fallthrough::runner::run;
use std::hint::black_box;

const ENGLISH_NUMERALS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

fn decimal(text: &str) -> Option<usize> {
    text.parse().ok()
}

fn english(text: &str) -> Option<usize> {
    ENGLISH_NUMERALS.iter().position(|numeral| *numeral == text)
}

fn roman(text: &str) -> Option<usize> {
    ROMAN_NUMERALS
        .iter()
        .position(|numeral| *numeral == text)
        .map(|index| index + 1)
}

const INPUTS: [&str; 4] = ["2019", "seven", "IX", "sieben"];

// =============================================================================
// 1. String to number - composition strategies
// =============================================================================

fn benchmark_string_to_number(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("string_to_number");

    let built = first_match![decimal, english, roman];
    let members: [fn(&str) -> Option<usize>; 3] = [decimal, english, roman];
    let chain: Chain<'_, str, usize> = members.into_iter().collect();

    for input in INPUTS {
        group.bench_with_input(BenchmarkId::new("or_else", input), input, |bencher, input| {
            bencher.iter(|| {
                black_box(
                    decimal(input)
                        .or_else(|| english(input))
                        .or_else(|| roman(input)),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("macro", input), input, |bencher, input| {
            bencher.iter(|| black_box(built.try_call(input)));
        });

        group.bench_with_input(BenchmarkId::new("run", input), input, |bencher, input| {
            bencher.iter(|| black_box(run(&members, input)));
        });

        group.bench_with_input(BenchmarkId::new("chain", input), input, |bencher, input| {
            bencher.iter(|| black_box(chain.call(input)));
        });
    }

    group.finish();
}

// =============================================================================
// 2. Exact-match table - position of the match
// =============================================================================

fn benchmark_lookup_table(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup_table");

    for size in [8, 64, 512] {
        let table: Vec<_> = (0..size).map(|key| single_point(key, key * 2)).collect();
        let chain: Chain<'_, i32, i32> = table.iter().copied().collect();

        for (label, probe) in [("first", 0), ("last", size - 1), ("missing", size)] {
            group.bench_with_input(
                BenchmarkId::new(format!("run_{label}"), size),
                &probe,
                |bencher, probe| {
                    bencher.iter(|| black_box(run(&table, probe)));
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("chain_{label}"), size),
                &probe,
                |bencher, probe| {
                    bencher.iter(|| black_box(chain.call(probe)));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, benchmark_string_to_number, benchmark_lookup_table);

criterion_main!(benches);
